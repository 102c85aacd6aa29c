//! Service IR — one extracted service and its exposed operations.

use serde::{Deserialize, Serialize};

use crate::types::HttpVerb;

/// A parameter of an exposed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDef {
    /// Parameter name (e.g. `user`).
    pub name: String,

    /// Rendered semantic type name (e.g. `User`, `Vec<String>`).
    pub ty: String,
}

/// One exposed endpoint of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Handler identifier. Unique within the owning service: model
    /// construction fails unless exactly one member carries this name.
    pub name: String,

    /// HTTP verb recovered from the registration statement.
    pub verb: HttpVerb,

    /// Relative route segment, derived from the registration arguments or
    /// the handler name.
    pub route: String,

    /// Parameters in declaration order. Empty is permitted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamDef>,

    /// Payload type name, or `None` for void-like returns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

/// One qualifying declaration's extracted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// The declaration's simple identifier (e.g. `UserService`).
    pub name: String,

    /// Base-address override from the declaration's own initializer.
    /// Falls back to the bundle's global address when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_address: Option<String>,

    /// Operations in registration-statement declaration order.
    pub operations: Vec<Operation>,
}

impl Service {
    /// Find an operation by handler name.
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Effective base address once the global fallback is applied.
    pub fn address<'a>(&'a self, global: &'a str) -> &'a str {
        self.base_address.as_deref().unwrap_or(global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_service() -> Service {
        Service {
            name: "UserService".into(),
            base_address: None,
            operations: vec![
                Operation {
                    name: "ListUsersAsync".into(),
                    verb: HttpVerb::Get,
                    route: "ListUsers".into(),
                    params: vec![],
                    return_type: Some("Vec<User>".into()),
                },
                Operation {
                    name: "CreateUserAsync".into(),
                    verb: HttpVerb::Post,
                    route: "users/new".into(),
                    params: vec![ParamDef {
                        name: "user".into(),
                        ty: "User".into(),
                    }],
                    return_type: Some("User".into()),
                },
            ],
        }
    }

    #[test]
    fn operation_lookup() {
        let svc = sample_service();
        assert!(svc.operation("ListUsersAsync").is_some());
        assert!(svc.operation("ListUsers").is_none());
    }

    #[test]
    fn address_fallback() {
        let mut svc = sample_service();
        assert_eq!(svc.address("https://api.example.com"), "https://api.example.com");

        svc.base_address = Some("https://users.example.com".into());
        assert_eq!(svc.address("https://api.example.com"), "https://users.example.com");
    }

    #[test]
    fn serde_roundtrip() {
        let svc = sample_service();
        let json = serde_json::to_string_pretty(&svc).unwrap();
        let back: Service = serde_json::from_str(&json).unwrap();
        assert_eq!(svc, back);
    }
}
