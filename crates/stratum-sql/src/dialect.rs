/// The database dialects the serializer can target. A dialect fixes the
/// parameter-placeholder prefix character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    SqlServer,
    Mysql,
    Oracle,
}

impl Dialect {
    /// The single character prefixed to every parameter placeholder, e.g.
    /// `@` yielding `@Param0`.
    pub fn prefix_char(self) -> char {
        match self {
            Self::SqlServer => '@',
            Self::Mysql => '?',
            Self::Oracle => ':',
        }
    }
}
