//! Tracked-request operations.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::{ApiClient, ApiRequest, ApiResponse, path_segment};
use crate::model::{RequestStatus, Requests};

pub struct RequestsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RequestsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn requests_get_with_http_info(
        &self,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
        filter_created_after: Option<DateTime<Utc>>,
        filter_created_before: Option<DateTime<Utc>>,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<ApiResponse<Requests>, ApiError> {
        let request = ApiRequest::get("/requests")
            .query("pretty", pretty)
            .query("depth", depth)
            .query(
                "filter.createdAfter",
                filter_created_after.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            )
            .query(
                "filter.createdBefore",
                filter_created_before.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            )
            .query("offset", offset)
            .query("limit", limit)
            .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    pub async fn requests_status_get_with_http_info(
        &self,
        request_id: Option<Uuid>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<RequestStatus>, ApiError> {
        let request = ApiRequest::get(format!(
            "/requests/{}/status",
            path_segment(&request_id)
        ))
        .query("pretty", pretty)
        .query("depth", depth)
        .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }
}
