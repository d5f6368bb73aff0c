mod config;
pub use config::Config;

pub mod editor;
pub use editor::{EditorState, FieldEditor, FieldLocation, SaveStatus};

pub mod fk;
pub use fk::ForeignKeyCandidate;

pub mod mode;
pub use mode::Mode;

pub mod remapping;
pub use remapping::EditBuffer;

pub mod transition;

pub use fieldmap_core::{
    schema, service, Error, FieldMutations, Metadata, MetadataRepository, Operation, Result,
};
