//! Caller codegen parser
//!
//! Extracts service models from Rust source (syn ASTs) for caller generation.
//! Used by:
//! - codegen binary (reads source files, runs one pass per invocation)
//! - tests (parse inline source snippets)
//!
//! The pipeline has three stages, leaves first:
//! 1. [`universe`] — in-memory index of type declarations, the resolution
//!    oracle the rest of the pipeline queries.
//! 2. [`scanner`] — selects declarations whose ancestry reaches the
//!    `ServiceBase` marker.
//! 3. [`builder`] — turns one confirmed candidate into a `Service` record,
//!    or fails just that candidate.
//!
//! [`pipeline::run_pass`] ties the stages together and collects
//! [`diag::Diagnostics`] along the way.

pub mod builder;
pub mod diag;
pub mod error;
pub mod pipeline;
pub mod scanner;
pub mod universe;
pub mod util;

pub use builder::build_service;
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::BuildError;
pub use pipeline::{run_pass, CancelToken, PassOutcome};
pub use scanner::{scan, MarkerSet, ASYNC_MARKER, SERVICE_MARKER};
pub use universe::{TypeDecl, TypeId, TypeUniverse};
