//! Issue records as seen by the extraction engine.
//!
//! Pure types only: what comes in from the tracker, what goes out to the caller,
//! and the failures strategies report to each other.

mod error;
pub use error::ParseFailure;

mod types;
pub use types::{ChildRecord, IssueRef, RepoRef};
