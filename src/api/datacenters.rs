//! Data center operations.

use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::{ApiClient, ApiRequest, ApiResponse, path_segment};
use crate::model::{Datacenter, Datacenters};

pub struct DataCentersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DataCentersApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn datacenters_get_with_http_info(
        &self,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<ApiResponse<Datacenters>, ApiError> {
        let request = ApiRequest::get("/datacenters")
            .query("pretty", pretty)
            .query("depth", depth)
            .query("offset", offset)
            .query("limit", limit)
            .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    pub async fn datacenters_find_by_id_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<Datacenter>, ApiError> {
        let request = ApiRequest::get(format!("/datacenters/{}", path_segment(&datacenter_id)))
            .query("pretty", pretty)
            .query("depth", depth)
            .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    pub async fn datacenters_post_with_http_info(
        &self,
        datacenter: Option<Datacenter>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<Datacenter>, ApiError> {
        let body = serde_json::to_value(datacenter)?;
        let request = ApiRequest::post("/datacenters", body)
            .query("pretty", pretty)
            .query("depth", depth)
            .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    pub async fn datacenters_delete_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let request =
            ApiRequest::delete(format!("/datacenters/{}", path_segment(&datacenter_id)))
                .query("pretty", pretty)
                .query("depth", depth)
                .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }
}
