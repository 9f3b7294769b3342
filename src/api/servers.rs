//! Server operations.

use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::{ApiClient, ApiRequest, ApiResponse, path_segment};
use crate::model::{Server, Servers};

pub struct ServersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ServersApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn servers_get_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
        offset: Option<i32>,
        limit: Option<i32>,
    ) -> Result<ApiResponse<Servers>, ApiError> {
        let request = ApiRequest::get(format!(
            "/datacenters/{}/servers",
            path_segment(&datacenter_id)
        ))
        .query("pretty", pretty)
        .query("depth", depth)
        .query("offset", offset)
        .query("limit", limit)
        .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    pub async fn servers_find_by_id_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        server_id: Option<Uuid>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<Server>, ApiError> {
        let request = ApiRequest::get(format!(
            "/datacenters/{}/servers/{}",
            path_segment(&datacenter_id),
            path_segment(&server_id)
        ))
        .query("pretty", pretty)
        .query("depth", depth)
        .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }

    /// Reboot returns 202 with an empty body; the payload is JSON `null`.
    pub async fn servers_reboot_post_with_http_info(
        &self,
        datacenter_id: Option<Uuid>,
        server_id: Option<Uuid>,
        pretty: Option<bool>,
        depth: Option<i32>,
        x_contract_number: Option<i32>,
    ) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        let request = ApiRequest::post(
            format!(
                "/datacenters/{}/servers/{}/reboot",
                path_segment(&datacenter_id),
                path_segment(&server_id)
            ),
            serde_json::Value::Null,
        )
        .query("pretty", pretty)
        .query("depth", depth)
        .header("X-Contract-Number", x_contract_number);
        self.client.execute_typed(request).await
    }
}
