//! Core library for the audit-tools command line application.
//!
//! The library exposes the high-level helpers that power the command-line
//! interface as well as the integration tests. The modules are structured to
//! keep responsibilities narrow and composable: IO adapters live under
//! [`audit::tools::io`], data representations inside [`audit::tools::model`],
//! the curated audit outcomes in [`audit::tools::catalog`], and the report
//! orchestration under [`audit::tools::report`].

pub mod audit;

pub use audit::tools::{Result, ToolError, catalog, error, io, model, report};
