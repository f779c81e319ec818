mod error;
pub use error::Error;

pub mod entity;
pub use entity::{Entity, EntityValues};

pub mod schema;
pub use schema::Registry;

pub mod stmt;

/// A Result type alias that uses Stratum's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
