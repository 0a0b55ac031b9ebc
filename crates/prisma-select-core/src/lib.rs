mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses prisma-select's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
