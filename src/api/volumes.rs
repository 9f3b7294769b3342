//! Volume operations.

use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::{ApiClient, ApiRequest, ApiResponse, path_segment};
use crate::model::{Snapshot, Volume, Volumes};

pub struct VolumesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> VolumesApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn volumes_get_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<ApiResponse<Volumes>, ApiError> {
        let request = ApiRequest::get(format!(
            "/datacenters/{}/volumes",
            path_segment(&datacenter_id)
        ))
        .query("pretty", pretty)
        .query("depth", depth)
        .query("offset", offset)
        .query("limit", limit)
        .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    pub async fn volumes_find_by_id_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        volume_id: Option<Uuid>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<Volume>, ApiError> {
        let request = ApiRequest::get(format!(
            "/datacenters/{}/volumes/{}",
            path_segment(&datacenter_id),
            path_segment(&volume_id)
        ))
        .query("pretty", pretty)
        .query("depth", depth)
        .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    pub async fn volumes_post_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        volume: Option<Volume>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<Volume>, ApiError> {
        let body = serde_json::to_value(volume)?;
        let request = ApiRequest::post(
            format!("/datacenters/{}/volumes", path_segment(&datacenter_id)),
            body,
        )
        .query("pretty", pretty)
        .query("depth", depth)
        .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    /// Snapshot creation takes its attributes as query parameters, not a
    /// request body.
    pub async fn volumes_create_snapshot_post_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        volume_id: Option<Uuid>,
        name: Option<String>,
        description: Option<String>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<Snapshot>, ApiError> {
        let request = ApiRequest::post(
            format!(
                "/datacenters/{}/volumes/{}/create-snapshot",
                path_segment(&datacenter_id),
                path_segment(&volume_id)
            ),
            serde_json::Value::Null,
        )
        .query("name", name)
        .query("description", description)
        .query("pretty", pretty)
        .query("depth", depth)
        .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    pub async fn volumes_delete_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        volume_id: Option<Uuid>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let request = ApiRequest::delete(format!(
            "/datacenters/{}/volumes/{}",
            path_segment(&datacenter_id),
            path_segment(&volume_id)
        ))
        .query("pretty", pretty)
        .query("depth", depth)
        .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }
}
