//! Error types for fragment binding, synthesis, and extension.
//!
//! Every failure is raised eagerly while a chain is being built or
//! synthesized. A compiled predicate never fails.

/// Errors arising from malformed fragments, chains, or extensions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VetterError {
    /// The synthesis input was absent.
    #[error("Validators is not an array")]
    InvalidFragmentList,

    /// A fragment carried no check.
    #[error("validator.function is not a function")]
    InvalidCheck { index: usize },

    /// A fragment's parameters were not a plain mapping.
    #[error("validator.parameters is not an object")]
    InvalidParameters { index: usize },

    /// An extension was registered without a factory.
    #[error("func is not a function")]
    InvalidExtension,

    /// An extension was registered without a method name.
    #[error("extension name must not be empty")]
    UnnamedExtension,

    /// An extension declared the same parameter name more than once.
    #[error("extension `{method}` declares parameter `{name}` more than once")]
    DuplicateParameter { method: String, name: String },

    /// A fragment requires a parameter its binding does not provide.
    #[error("unresolved parameter `{name}` in fragment `{fragment}`")]
    UnresolvedParameter { fragment: String, name: String },

    /// A chain called a method its builder does not know.
    #[error("{builder}.{method} is not a function")]
    UnknownMethod { builder: String, method: String },

    /// An installed method was called with the wrong number of arguments.
    #[error("{builder}.{method} expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        builder: String,
        method: String,
        expected: usize,
        actual: usize,
    },

    /// A catalog method was given an argument it cannot bind.
    #[error("invalid argument for {method}: {reason}")]
    InvalidArgument { method: String, reason: String },
}

impl VetterError {
    /// Which class of failure this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFragmentList => ErrorKind::InvalidFragmentList,
            Self::InvalidCheck { .. } => ErrorKind::InvalidCheck,
            Self::InvalidParameters { .. } => ErrorKind::InvalidParameters,
            Self::InvalidExtension | Self::UnnamedExtension | Self::DuplicateParameter { .. } => {
                ErrorKind::InvalidExtension
            }
            Self::UnresolvedParameter { .. } => ErrorKind::SynthesisSyntaxFailure,
            Self::UnknownMethod { .. } => ErrorKind::UnknownMethod,
            Self::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Which stage raised the failure.
    pub fn stage(&self) -> Stage {
        match self.kind() {
            ErrorKind::InvalidFragmentList
            | ErrorKind::InvalidCheck
            | ErrorKind::InvalidParameters
            | ErrorKind::SynthesisSyntaxFailure => Stage::Synthesis,
            ErrorKind::InvalidExtension => Stage::Registration,
            ErrorKind::UnknownMethod | ErrorKind::ArityMismatch | ErrorKind::InvalidArgument => {
                Stage::Construction
            }
        }
    }
}

/// Failure classification carried by every [`VetterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidFragmentList,
    InvalidCheck,
    InvalidParameters,
    InvalidExtension,
    SynthesisSyntaxFailure,
    UnknownMethod,
    ArityMismatch,
    InvalidArgument,
}

/// Build stage at which a failure was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// `extend` rejected a registration.
    Registration,
    /// A chain method rejected its call or arguments.
    Construction,
    /// `compile` rejected the fragment sequence.
    Synthesis,
}
