mod dialect;
pub use dialect::Dialect;

pub mod serializer;
pub use serializer::{Param, ParamGenerator, Serializer, SqlStatement};

pub mod stmt;
pub use stmt::Statement;

pub mod synthesizer;
pub use synthesizer::{IdentitySource, Synthesizer, UuidSource};
