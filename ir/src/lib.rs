//! Caller codegen Intermediate Representation (IR)
//!
//! Data structures shared between:
//! - parser (extracts services from source declarations)
//! - codegen library (renders caller code from the bundle)
//! - codegen binary (serializes the bundle for downstream tooling)
//!
//! Three layers:
//! 1. Types   — HTTP verb enumeration
//! 2. Service — one extracted service and its operations
//! 3. Bundle  — the aggregated generation unit plus configuration

pub mod types;
pub mod service;
pub mod bundle;

pub use types::*;
pub use service::*;
pub use bundle::*;
