#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::Metadata;

pub mod service;
pub use service::{FieldMutations, MetadataRepository, Operation};

/// A Result type alias that uses fieldmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
