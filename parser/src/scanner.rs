//! Declaration scanner: selects the declarations whose ancestry reaches the
//! service marker type.
//!
//! Two phases per declaration:
//! 1. a cheap syntactic pre-filter (does it declare a base at all), then
//! 2. the authoritative ancestry walk against the resolved marker.
//!
//! The pre-filter is a rejection heuristic, never a correctness boundary:
//! anything it admits is still confirmed semantically, and it must never
//! reject a declaration the semantic walk would accept. Matching the base
//! text against the marker's name would break that contract for services
//! inheriting through an intermediate base with an unrelated name, so the
//! filter only tests for the presence of a base reference.

use tracing::debug;

use crate::pipeline::CancelToken;
use crate::universe::{TypeId, TypeUniverse};

/// Simple name of the marker base type that qualifies a service.
pub const SERVICE_MARKER: &str = "ServiceBase";

/// Simple name of the asynchronous-result marker type. Generic return
/// wrappers based on it are unwrapped one level during enrichment.
pub const ASYNC_MARKER: &str = "Async";

/// Marker symbols resolved once per generation pass and threaded explicitly
/// through scanner and builder calls.
#[derive(Debug, Clone, Copy)]
pub struct MarkerSet {
    /// The service marker declaration.
    pub service_base: TypeId,
    /// The async-result marker declaration, when the universe declares one.
    pub async_result: Option<TypeId>,
}

impl MarkerSet {
    /// Resolve both markers against the universe.
    ///
    /// `None` when the service marker itself cannot be resolved: the whole
    /// scan is meaningless without it, so the pass yields zero candidates
    /// rather than partial results. A missing async marker only disables
    /// return-type unwrapping.
    pub fn resolve(universe: &TypeUniverse) -> Option<Self> {
        let service_base = universe.resolve(SERVICE_MARKER)?;
        Some(MarkerSet {
            service_base,
            async_result: universe.resolve(ASYNC_MARKER),
        })
    }
}

/// Produce the candidate set: every declaration inheriting, directly or
/// transitively, from the service marker. Checks the cancel token between
/// declarations.
pub fn scan(universe: &TypeUniverse, markers: &MarkerSet, cancel: &CancelToken) -> Vec<TypeId> {
    let mut candidates = Vec::new();
    for id in universe.types() {
        if cancel.is_cancelled() {
            debug!("scan cancelled");
            break;
        }
        let decl = universe.decl(id);
        if decl.base.is_none() {
            continue;
        }
        if inherits_from(universe, id, markers.service_base) {
            debug!(service = decl.name.as_str(), "confirmed candidate");
            candidates.push(id);
        }
    }
    candidates
}

/// Walk the base-type chain until the marker is reached or the chain ends.
/// There is no depth limit; a chain longer than the universe's declaration
/// count must have cycled and is treated as exhausted.
fn inherits_from(universe: &TypeUniverse, id: TypeId, marker: TypeId) -> bool {
    let mut hops = 0;
    let mut current = universe.base_of(id);
    while let Some(base) = current {
        if base == marker {
            return true;
        }
        hops += 1;
        if hops > universe.len() {
            return false;
        }
        current = universe.base_of(base);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(input: &str) -> Vec<String> {
        let universe = TypeUniverse::from_sources([input]).expect("failed to parse");
        let markers = match MarkerSet::resolve(&universe) {
            Some(markers) => markers,
            None => return vec![],
        };
        scan(&universe, &markers, &CancelToken::new())
            .into_iter()
            .map(|id| universe.decl(id).name.clone())
            .collect()
    }

    #[test]
    fn direct_inheritance() {
        let found = candidates(
            r#"
            pub struct ServiceBase;
            pub struct UserService(ServiceBase);
            pub struct Plain { pub field: u32 }
            "#,
        );
        assert_eq!(found, vec!["UserService"]);
    }

    #[test]
    fn transitive_inheritance_has_no_depth_ceiling() {
        let found = candidates(
            r#"
            pub struct ServiceBase;
            pub struct Level1(ServiceBase);
            pub struct Level2(Level1);
            pub struct Level3(Level2);
            pub struct DeepService(Level3);
            "#,
        );
        assert_eq!(found, vec!["Level1", "Level2", "Level3", "DeepService"]);
    }

    #[test]
    fn intermediate_base_with_unrelated_name_is_still_found() {
        // The direct base never mentions the marker textually; only the
        // semantic walk can admit this one.
        let found = candidates(
            r#"
            pub struct ServiceBase;
            pub struct Middle(ServiceBase);
            pub struct UserService(Middle);
            "#,
        );
        assert_eq!(found, vec!["Middle", "UserService"]);
    }

    #[test]
    fn lookalike_ancestry_is_rejected() {
        // Base names resembling the marker do not qualify: ancestry is
        // decided by the resolved chain, not by text.
        let found = candidates(
            r#"
            pub struct ServiceBase;
            pub struct OtherServiceBase;
            pub struct Impostor(OtherServiceBase);
            "#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn unresolved_base_chain_is_rejected() {
        let found = candidates(
            r#"
            pub struct ServiceBase;
            pub struct Orphan(Missing);
            "#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn base_chain_cycle_terminates() {
        let found = candidates(
            r#"
            pub struct ServiceBase;
            pub struct A(B);
            pub struct B(A);
            "#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn missing_marker_is_scan_fatal() {
        let found = candidates(
            r#"
            pub struct SomethingElse;
            pub struct UserService(SomethingElse);
            "#,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn cancelled_scan_stops_early() {
        let universe = TypeUniverse::from_sources([r#"
            pub struct ServiceBase;
            pub struct UserService(ServiceBase);
        "#])
        .unwrap();
        let markers = MarkerSet::resolve(&universe).unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        assert!(scan(&universe, &markers, &cancel).is_empty());
    }
}
