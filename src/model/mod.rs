//! Data model for the cloud API surface the dispatcher drives.
//!
//! These types mirror what an OpenAPI-generated client would emit: resource
//! structs with optional fields, `metadata`/`properties` nesting, collection
//! wrappers with `items`, and the shared [`ResourceType`] discriminator.

mod common;
mod datacenter;
mod request;
mod server;
mod snapshot;
mod volume;

pub use common::{ApiErrorBody, ApiErrorMessage, Metadata, ResourceType};
pub use datacenter::{Datacenter, DatacenterProperties, Datacenters};
pub use request::{
    Request, RequestMetadata, RequestProperties, RequestState, RequestStatus,
    RequestStatusMetadata, Requests,
};
pub use server::{Server, ServerProperties, Servers};
pub use snapshot::{Snapshot, SnapshotProperties};
pub use volume::{Volume, VolumeProperties, Volumes};
