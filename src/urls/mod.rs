//! Resource URL derivation.
//!
//! # Data Flow
//! ```text
//! (type name, id?, relationship context?)
//!     → plurals.rs (segment pluralization)
//!     → builder.rs (path assembly + namespace prefix)
//!     → host-relative path, always trailing-slashed
//! ```
//!
//! # Design Decisions
//! - Pure string construction; no allocation beyond the returned path
//! - The builder is compiled once from config and immutable afterwards

pub mod builder;
pub mod plurals;

pub use builder::UrlBuilder;
pub use plurals::PluralTable;
