/// The value type a mapped property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Bool,
    I32,
    I64,
    F64,
    String,
    Uuid,
}

impl Type {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::I32 | Self::I64 | Self::F64)
    }
}
