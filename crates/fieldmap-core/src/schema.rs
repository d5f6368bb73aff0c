//! Field metadata as seen by the display-value editor

mod base_type;
pub use base_type::BaseType;

mod database;
pub use database::{Database, DatabaseId, DatabaseMetadata};

mod dimension;
pub use dimension::{Dimension, DimensionSpec, DimensionType};

mod field;
pub use field::{Field, FieldId};

mod fk;
pub use fk::{DefaultDimension, ForeignKeyOption, TargetDimension, TemporalUnit};

mod metadata;
pub use metadata::Metadata;

mod remapping;
pub use remapping::RemappingTable;

mod semantic_type;
pub use semantic_type::SemanticType;

mod table;
pub use table::{Table, TableId, TableMetadata};

mod value;
pub use value::RawValue;
