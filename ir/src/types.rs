//! Shared types used across all IR layers.

use serde::{Deserialize, Serialize};

/// HTTP verb for an exposed operation.
///
/// The set is closed by contract: registration statements map onto exactly
/// these four verbs, and an unrecognized registration name fails the whole
/// candidate rather than extending the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpVerb {
    /// Map a registration call name to its verb. Case-sensitive.
    /// Returns `None` for anything outside the fixed four-name grammar.
    pub fn from_registration(name: &str) -> Option<Self> {
        match name {
            "map_get" => Some(HttpVerb::Get),
            "map_post" => Some(HttpVerb::Post),
            "map_put" => Some(HttpVerb::Put),
            "map_delete" => Some(HttpVerb::Delete),
            _ => None,
        }
    }

    /// Lowercase verb name, matching reqwest's builder methods.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Delete => "delete",
        }
    }

    /// Whether this verb carries a request body in generated callers.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpVerb::Post | HttpVerb::Put)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_mapping_is_total_over_the_four_names() {
        assert_eq!(HttpVerb::from_registration("map_get"), Some(HttpVerb::Get));
        assert_eq!(HttpVerb::from_registration("map_post"), Some(HttpVerb::Post));
        assert_eq!(HttpVerb::from_registration("map_put"), Some(HttpVerb::Put));
        assert_eq!(
            HttpVerb::from_registration("map_delete"),
            Some(HttpVerb::Delete)
        );
    }

    #[test]
    fn registration_mapping_rejects_unknown_names() {
        assert_eq!(HttpVerb::from_registration("map_patch"), None);
        assert_eq!(HttpVerb::from_registration("MapGet"), None);
        assert_eq!(HttpVerb::from_registration(""), None);
    }

    #[test]
    fn body_verbs() {
        assert!(HttpVerb::Post.has_body());
        assert!(HttpVerb::Put.has_body());
        assert!(!HttpVerb::Get.has_body());
        assert!(!HttpVerb::Delete.has_body());
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&HttpVerb::Post).unwrap();
        let back: HttpVerb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HttpVerb::Post);
    }
}
