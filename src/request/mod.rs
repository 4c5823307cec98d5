//! Request shaping.
//!
//! # Data Flow
//! ```text
//! Snapshot / (type, id)
//!     → serializer.rs (attribute hash, FK-by-id)
//!     → plan.rs (verb + path + body rule table)
//!     → RequestPlan → transport
//! ```

pub mod plan;
pub mod serializer;

pub use plan::{RequestPlan, RequestPlanner};
