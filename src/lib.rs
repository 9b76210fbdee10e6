//! Parent -> children relationships and ETAs, extracted from free-form issue text.
//!
//! Nothing here touches the network or disk: callers fetch issues, hand over an [`IssueRef`],
//! and walk the returned children themselves.

pub mod children;
pub mod config;
pub mod diagnostics;
pub mod due_date;
pub mod issue;
pub mod markup;

// Re-export the entry points at crate root for convenience
pub use children::{ExtractOptions, Extraction, Extractor, Fallback, StrategyKind, get_children};
pub use config::{ConfigError, Settings};
pub use diagnostics::{ErrorEntry, ErrorLog, ErrorSink};
pub use due_date::{DueDate, EtaError, get_due_date, scan_eta};
pub use issue::{ChildRecord, IssueRef, ParseFailure, RepoRef};
