//! One generation pass: marker resolution, scan, per-candidate build,
//! bundle assembly.
//!
//! Every pass is a clean computation over an immutable universe snapshot:
//! no state survives between passes, and candidates never depend on one
//! another. Emission happens elsewhere, strictly after the whole pass.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use caller_ir::{CallerBundle, CallerConfig};
use tracing::debug;

use crate::builder::build_service;
use crate::diag::Diagnostics;
use crate::scanner::{scan, MarkerSet, SERVICE_MARKER};
use crate::universe::TypeUniverse;

/// Cooperative cancellation for a generation pass, checked between
/// candidates. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. The pass stops at the next candidate boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Everything one pass produces: the bundle ready for emission, plus the
/// diagnostics collected along the way.
#[derive(Debug)]
pub struct PassOutcome {
    pub bundle: CallerBundle,
    pub diagnostics: Diagnostics,
}

/// Run one generation pass over the universe.
///
/// Candidate failures are recoverable: the affected declaration is dropped
/// and diagnosed, all others still emit. Only an unresolvable service marker
/// empties the whole pass.
pub fn run_pass(
    universe: &TypeUniverse,
    config: CallerConfig,
    cancel: &CancelToken,
) -> PassOutcome {
    let mut diagnostics = Diagnostics::new();

    if config.base_address.is_none() {
        diagnostics.warn(
            None,
            "no global base address configured; callers without an override fall back to an empty address",
        );
    }

    let Some(markers) = MarkerSet::resolve(universe) else {
        diagnostics.error(
            None,
            format!("marker type `{SERVICE_MARKER}` is not declared; nothing to scan"),
        );
        return PassOutcome {
            bundle: CallerBundle::assemble(config, Vec::new()),
            diagnostics,
        };
    };

    let mut services = Vec::new();
    for id in scan(universe, &markers, cancel) {
        if cancel.is_cancelled() {
            diagnostics.warn(None, "generation pass cancelled");
            break;
        }
        let name = universe.decl(id).name.clone();
        match build_service(universe, &markers, id) {
            Ok(service) => {
                debug!(service = name.as_str(), operations = service.operations.len(), "built service");
                services.push(service);
            }
            Err(err) => diagnostics.warn(Some(&name), err.to_string()),
        }
    }

    PassOutcome {
        bundle: CallerBundle::assemble(config, services),
        diagnostics,
    }
}
