pub mod blueprint;
pub mod report;

pub use crate::domain::DomainError;
pub use blueprint::Blueprint;
pub use report::{ScaffoldReport, VcsOutcome};
