use super::Type;

use uuid::Uuid;

/// A property value bound into a parameterized statement.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point
    F64(f64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// A surrogate identity value
    Uuid(Uuid),
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The type of the value, `None` for null.
    pub fn ty(&self) -> Option<Type> {
        match self {
            Self::Bool(_) => Some(Type::Bool),
            Self::I32(_) => Some(Type::I32),
            Self::I64(_) => Some(Type::I64),
            Self::F64(_) => Some(Type::F64),
            Self::Null => None,
            Self::String(_) => Some(Type::String),
            Self::Uuid(_) => Some(Type::Uuid),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}
