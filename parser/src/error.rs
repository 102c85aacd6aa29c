//! Candidate-level failure taxonomy.

use thiserror::Error;

/// Why one candidate's model construction failed.
///
/// Every variant is candidate-fatal and pass-recoverable: the affected
/// declaration is dropped from the bundle while all other candidates
/// proceed. The pipeline surfaces each as a warning diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A registration statement invoked a name outside the four-verb
    /// grammar. The enumeration is closed; this is never a best-effort
    /// guess.
    #[error("unrecognized registration `{0}`")]
    UnknownRegistration(String),

    /// A registration statement carried no arguments at all.
    #[error("registration is missing its handler argument")]
    MissingHandler,

    /// The first registration argument was not a plain handler reference.
    #[error("registration handler must be a plain identifier")]
    MalformedHandler,

    /// A registration supplied more than one custom route.
    #[error("registration for `{0}` has more than one route argument")]
    DuplicateRoute(String),

    /// A registration supplied more than one trim flag.
    #[error("registration for `{0}` has more than one trim-flag argument")]
    DuplicateTrimFlag(String),

    /// A registration argument was neither a string literal nor a bool
    /// literal.
    #[error("registration for `{0}` has an unsupported argument")]
    UnsupportedArgument(String),

    /// A declared method has no registration statement naming it.
    #[error("method `{0}` has no matching registration")]
    UnregisteredMethod(String),

    /// Two declared methods carry the same registered name.
    #[error("duplicate method `{0}`")]
    DuplicateMember(String),

    /// A registration names a handler that is never declared as a method.
    #[error("registered handler `{0}` has no matching method")]
    UnknownHandler(String),
}
