/*!
The operation registry: one entry per client-library call.

This table is the hand-built equivalent of generated code. Every entry
declares its parameter schema in signature order and wraps exactly one
`*_with_http_info` method; the adapter coerces its own arguments, so the
argument types are checked at the call site instead of through any runtime
inspection.

Adding an operation means adding one struct here and listing it in
`OPERATIONS`; the catalog rejects duplicate names at startup.
*/

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{
    ApiClient, ApiResponse, DataCentersApi, RequestsApi, ServersApi, VolumesApi,
};
use crate::dispatch::catalog::{Operation, ParamSpec, ParamType};
use crate::dispatch::coerce::Params;
use crate::error::DispatchError;

/// Every dispatchable operation. The catalog indexes this table once per
/// run; order is irrelevant, names must be unique.
pub(crate) static OPERATIONS: &[&'static dyn Operation] = &[
    &DatacentersGet,
    &DatacentersFindById,
    &DatacentersPost,
    &DatacentersDelete,
    &VolumesGet,
    &VolumesFindById,
    &VolumesPost,
    &VolumesCreateSnapshotPost,
    &VolumesDelete,
    &ServersGet,
    &ServersFindById,
    &ServersRebootPost,
    &RequestsGet,
    &RequestsStatusGet,
];

/* ---- DataCentersApi ---- */

#[derive(Debug)]
struct DatacentersGet;

#[async_trait]
impl Operation for DatacentersGet {
    fn name(&self) -> &'static str {
        "datacentersGet"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
            ParamSpec { name: "offset", ty: ParamType::Int },
            ParamSpec { name: "limit", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = DataCentersApi::new(client)
            .datacenters_get_with_http_info(p.opt(0)?, p.opt(1)?, p.opt(2)?, p.opt(3)?, p.opt(4)?)
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct DatacentersFindById;

#[async_trait]
impl Operation for DatacentersFindById {
    fn name(&self) -> &'static str {
        "datacentersFindById"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = DataCentersApi::new(client)
            .datacenters_find_by_id_with_http_info(p.opt(0)?, p.opt(1)?, p.opt(2)?, p.opt(3)?)
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct DatacentersPost;

#[async_trait]
impl Operation for DatacentersPost {
    fn name(&self) -> &'static str {
        "datacentersPost"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenter", ty: ParamType::Object },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = DataCentersApi::new(client)
            .datacenters_post_with_http_info(p.opt(0)?, p.opt(1)?, p.opt(2)?, p.opt(3)?)
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct DatacentersDelete;

#[async_trait]
impl Operation for DatacentersDelete {
    fn name(&self) -> &'static str {
        "datacentersDelete"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = DataCentersApi::new(client)
            .datacenters_delete_with_http_info(p.opt(0)?, p.opt(1)?, p.opt(2)?, p.opt(3)?)
            .await?;
        Ok(response.into_value()?)
    }
}

/* ---- VolumesApi ---- */

#[derive(Debug)]
struct VolumesGet;

#[async_trait]
impl Operation for VolumesGet {
    fn name(&self) -> &'static str {
        "volumesGet"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
            ParamSpec { name: "offset", ty: ParamType::Int },
            ParamSpec { name: "limit", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = VolumesApi::new(client)
            .volumes_get_with_http_info(
                p.opt(0)?,
                p.opt(1)?,
                p.opt(2)?,
                p.opt(3)?,
                p.opt(4)?,
                p.opt(5)?,
            )
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct VolumesFindById;

#[async_trait]
impl Operation for VolumesFindById {
    fn name(&self) -> &'static str {
        "volumesFindById"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "volumeId", ty: ParamType::Uuid },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = VolumesApi::new(client)
            .volumes_find_by_id_with_http_info(
                p.opt(0)?,
                p.opt(1)?,
                p.opt(2)?,
                p.opt(3)?,
                p.opt(4)?,
            )
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct VolumesPost;

#[async_trait]
impl Operation for VolumesPost {
    fn name(&self) -> &'static str {
        "volumesPost"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "volume", ty: ParamType::Object },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = VolumesApi::new(client)
            .volumes_post_with_http_info(p.opt(0)?, p.opt(1)?, p.opt(2)?, p.opt(3)?, p.opt(4)?)
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct VolumesCreateSnapshotPost;

#[async_trait]
impl Operation for VolumesCreateSnapshotPost {
    fn name(&self) -> &'static str {
        "volumesCreateSnapshotPost"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "volumeId", ty: ParamType::Uuid },
            ParamSpec { name: "name", ty: ParamType::String },
            ParamSpec { name: "description", ty: ParamType::String },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = VolumesApi::new(client)
            .volumes_create_snapshot_post_with_http_info(
                p.opt(0)?,
                p.opt(1)?,
                p.opt(2)?,
                p.opt(3)?,
                p.opt(4)?,
                p.opt(5)?,
                p.opt(6)?,
            )
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct VolumesDelete;

#[async_trait]
impl Operation for VolumesDelete {
    fn name(&self) -> &'static str {
        "volumesDelete"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "volumeId", ty: ParamType::Uuid },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = VolumesApi::new(client)
            .volumes_delete_with_http_info(p.opt(0)?, p.opt(1)?, p.opt(2)?, p.opt(3)?, p.opt(4)?)
            .await?;
        Ok(response.into_value()?)
    }
}

/* ---- ServersApi ---- */

#[derive(Debug)]
struct ServersGet;

#[async_trait]
impl Operation for ServersGet {
    fn name(&self) -> &'static str {
        "serversGet"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
            ParamSpec { name: "offset", ty: ParamType::Int },
            ParamSpec { name: "limit", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = ServersApi::new(client)
            .servers_get_with_http_info(
                p.opt(0)?,
                p.opt(1)?,
                p.opt(2)?,
                p.opt(3)?,
                p.opt(4)?,
                p.opt(5)?,
            )
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct ServersFindById;

#[async_trait]
impl Operation for ServersFindById {
    fn name(&self) -> &'static str {
        "serversFindById"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "serverId", ty: ParamType::Uuid },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = ServersApi::new(client)
            .servers_find_by_id_with_http_info(
                p.opt(0)?,
                p.opt(1)?,
                p.opt(2)?,
                p.opt(3)?,
                p.opt(4)?,
            )
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct ServersRebootPost;

#[async_trait]
impl Operation for ServersRebootPost {
    fn name(&self) -> &'static str {
        "serversRebootPost"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "datacenterId", ty: ParamType::Uuid },
            ParamSpec { name: "serverId", ty: ParamType::Uuid },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = ServersApi::new(client)
            .servers_reboot_post_with_http_info(
                p.opt(0)?,
                p.opt(1)?,
                p.opt(2)?,
                p.opt(3)?,
                p.opt(4)?,
            )
            .await?;
        Ok(response.into_value()?)
    }
}

/* ---- RequestsApi ---- */

#[derive(Debug)]
struct RequestsGet;

#[async_trait]
impl Operation for RequestsGet {
    fn name(&self) -> &'static str {
        "requestsGet"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
            ParamSpec { name: "filterCreatedAfter", ty: ParamType::DateTime },
            ParamSpec { name: "filterCreatedBefore", ty: ParamType::DateTime },
            ParamSpec { name: "offset", ty: ParamType::Int },
            ParamSpec { name: "limit", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = RequestsApi::new(client)
            .requests_get_with_http_info(
                p.opt(0)?,
                p.opt(1)?,
                p.opt(2)?,
                p.opt(3)?,
                p.opt(4)?,
                p.opt(5)?,
                p.opt(6)?,
            )
            .await?;
        Ok(response.into_value()?)
    }
}

#[derive(Debug)]
struct RequestsStatusGet;

#[async_trait]
impl Operation for RequestsStatusGet {
    fn name(&self) -> &'static str {
        "requestsStatusGet"
    }

    fn params(&self) -> &'static [ParamSpec] {
        static PARAMS: &[ParamSpec] = &[
            ParamSpec { name: "requestId", ty: ParamType::Uuid },
            ParamSpec { name: "pretty", ty: ParamType::Bool },
            ParamSpec { name: "depth", ty: ParamType::Int },
            ParamSpec { name: "xContractNumber", ty: ParamType::Int },
        ];
        PARAMS
    }

    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError> {
        let p = Params::new(args, self.params());
        let response = RequestsApi::new(client)
            .requests_status_get_with_http_info(p.opt(0)?, p.opt(1)?, p.opt(2)?, p.opt(3)?)
            .await?;
        Ok(response.into_value()?)
    }
}
