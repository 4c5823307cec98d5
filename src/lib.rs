//! Django REST Framework adapter for client-side data frameworks.
//!
//! Shapes `(method, URL, body)` requests following DRF conventions —
//! pluralized resource names, trailing-slash URLs, owner-nested paths for
//! dependent records, foreign keys by id — and dispatches them through an
//! injected transport. Record lifecycle, dirty tracking, and association
//! caching stay with the host framework.

pub mod adapter;
pub mod config;
pub mod model;
pub mod request;
pub mod transport;
pub mod urls;

pub use adapter::{AdapterError, AdapterResult, DjangoRestAdapter, ResourcePayload};
pub use config::AdapterConfig;
pub use model::{RecordId, ResourceType, Snapshot};
pub use request::{RequestPlan, RequestPlanner};
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
pub use urls::{PluralTable, UrlBuilder};
