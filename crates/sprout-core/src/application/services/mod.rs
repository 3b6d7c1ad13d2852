//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "check a layout".

pub mod layout_service;
pub mod scaffold_service;

pub use layout_service::{LayoutInfo, LayoutService};
pub use scaffold_service::{BASELINE_FILES, ScaffoldRequest, ScaffoldService};
