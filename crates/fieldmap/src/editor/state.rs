use crate::{fk::ForeignKeyCandidate, mode::Mode};
use fieldmap_core::schema::FieldId;

/// Progress of the most recent mutation issued by an editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing has been written in this session
    #[default]
    Idle,

    /// A mutation is in flight
    Saving,

    /// The last mutation succeeded
    Saved,

    /// The last mutation failed
    Failed,
}

/// What a view renders for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub mode: Mode,

    /// Modes the user may pick, in display order
    pub available_modes: Vec<Mode>,

    /// FK remapping candidates. Only populated in foreign mode.
    pub candidates: Vec<ForeignKeyCandidate>,

    /// Currently selected FK target, if any. `None` in foreign mode means
    /// the user has to choose one.
    pub foreign_target: Option<FieldId>,

    pub save_status: SaveStatus,
}
