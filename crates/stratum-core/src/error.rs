use std::fmt;

/// An error that can occur while building a registry, mutating an entity, or
/// synthesizing statements.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug, Clone)]
enum ErrorKind {
    /// The class-definition graph is malformed: an inheritance cycle, a
    /// dangling reference, a key naming an undefined property, ...
    InvalidSchema(String),

    /// A requested property name does not resolve anywhere in the
    /// inheritance chain.
    UnknownProperty(String),

    /// Surrogate identity generation failed for an INSERT.
    IdentityGeneration(String),

    /// A property write was rejected by its read/write rule or by the
    /// instance lifecycle state.
    ForbiddenWrite(String),

    /// A primary-key value required to address a row is unassigned.
    MissingKey(String),
}

impl Error {
    pub fn invalid_schema(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidSchema(msg.into()),
        }
    }

    pub fn unknown_property(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::UnknownProperty(msg.into()),
        }
    }

    pub fn identity_generation(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::IdentityGeneration(msg.into()),
        }
    }

    pub fn forbidden_write(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ForbiddenWrite(msg.into()),
        }
    }

    pub fn missing_key(msg: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MissingKey(msg.into()),
        }
    }

    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidSchema(_))
    }

    pub fn is_unknown_property(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownProperty(_))
    }

    pub fn is_identity_generation(&self) -> bool {
        matches!(self.kind, ErrorKind::IdentityGeneration(_))
    }

    pub fn is_forbidden_write(&self) -> bool {
        matches!(self.kind, ErrorKind::ForbiddenWrite(_))
    }

    pub fn is_missing_key(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingKey(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InvalidSchema(msg) => write!(f, "invalid schema: {msg}"),
            ErrorKind::UnknownProperty(msg) => write!(f, "unknown property: {msg}"),
            ErrorKind::IdentityGeneration(msg) => write!(f, "identity generation failed: {msg}"),
            ErrorKind::ForbiddenWrite(msg) => write!(f, "forbidden write: {msg}"),
            ErrorKind::MissingKey(msg) => write!(f, "missing key value: {msg}"),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}
