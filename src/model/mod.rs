//! Adapter-facing view of host records.
//!
//! # Data Flow
//! ```text
//! Host framework (record identity, dirty tracking, lifecycle)
//!     → Snapshot (type, id, attributes, to-one values)
//!     → request planning & serialization
//! ```
//!
//! # Design Decisions
//! - The adapter never owns records; it reads snapshots the host builds
//! - Ids are numeric (u64) per the backend's integer primary keys
//! - To-many membership is resolved by the host; the adapter only derives
//!   the URL to fetch it from

pub mod snapshot;
pub mod types;

pub use snapshot::{BelongsTo, Snapshot};
pub use types::{RecordId, ResourceType};
