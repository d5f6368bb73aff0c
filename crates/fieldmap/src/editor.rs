//! A display-values editing session for a single field

mod builder;
pub use builder::Builder;

mod state;
pub use state::{EditorState, SaveStatus};

use crate::{
    fk::{self, ForeignKeyCandidate},
    mode::{self, Mode},
    remapping::{self, EditBuffer},
    transition::{self, Controller, Transition},
    Config,
};

use fieldmap_core::{
    schema::{DatabaseId, Field, FieldId, TableId, TableMetadata},
    Error, FieldMutations, Metadata, MetadataRepository, Result,
};
use log::{debug, warn};

use std::sync::Arc;

/// Where the edited field lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLocation {
    pub database: DatabaseId,
    pub table: TableId,
    pub field: FieldId,
}

/// Owns the loaded metadata of one field editing session.
///
/// Mutating methods take `&mut self`, so at most one mutation per session is
/// in flight. Local metadata only changes after the service confirmed a
/// write; a failed call leaves the mode exactly as it was.
#[derive(Debug)]
pub struct FieldEditor {
    repository: Arc<dyn MetadataRepository>,
    mutations: Arc<dyn FieldMutations>,
    config: Config,
    location: FieldLocation,
    metadata: Metadata,
    save_status: SaveStatus,
}

impl FieldLocation {
    pub fn new(
        database: impl Into<DatabaseId>,
        table: impl Into<TableId>,
        field: impl Into<FieldId>,
    ) -> FieldLocation {
        FieldLocation {
            database: database.into(),
            table: table.into(),
            field: field.into(),
        }
    }
}

impl FieldEditor {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(
        repository: Arc<dyn MetadataRepository>,
        mutations: Arc<dyn FieldMutations>,
        config: Config,
        location: FieldLocation,
    ) -> FieldEditor {
        FieldEditor {
            repository,
            mutations,
            config,
            location,
            metadata: Metadata::new(),
            save_status: SaveStatus::Idle,
        }
    }

    /// Loads the database, then the field's table.
    ///
    /// The whole database is needed so FK options can be computed for
    /// whatever table the field's key points at. The table fetch comes
    /// second because only it hydrates dimensions.
    pub async fn load(&mut self) -> Result<()> {
        let database = self
            .repository
            .fetch_database(self.location.database)
            .await?;
        self.metadata.apply_database(database);

        let table = self.fetch_table().await?;
        self.metadata.apply_table(table);

        // Fail early if the field itself is missing
        self.field()?;
        Ok(())
    }

    pub fn location(&self) -> FieldLocation {
        self.location
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn field(&self) -> Result<&Field> {
        self.metadata.field(self.location.field)
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    pub fn mode(&self) -> Result<Mode> {
        Ok(mode::resolve_mode(self.field()?))
    }

    pub fn available_modes(&self) -> Result<Vec<Mode>> {
        Ok(mode::available_modes(self.field()?))
    }

    /// FK remapping candidates of the field.
    pub fn candidates(&self) -> Result<Vec<ForeignKeyCandidate>> {
        fk::candidates(self.field()?, &self.metadata)
    }

    /// The field display values are currently borrowed from, if any.
    pub fn foreign_target(&self) -> Result<Option<&Field>> {
        let Some(target) = self.field()?.dimension.external_target() else {
            return Ok(None);
        };

        match self.metadata.get_field(target) {
            Some(field) => Ok(Some(field)),
            None => {
                warn!(
                    "external dimension target is not loaded; field={} target={target}",
                    self.location.field
                );
                Ok(None)
            }
        }
    }

    /// Snapshot of everything a view needs to render the session.
    pub fn state(&self) -> Result<EditorState> {
        let mode = self.mode()?;

        Ok(EditorState {
            mode,
            available_modes: self.available_modes()?,
            candidates: match mode {
                Mode::Foreign => self.candidates()?,
                _ => vec![],
            },
            foreign_target: self.foreign_target()?.map(|field| field.id),
            save_status: self.save_status,
        })
    }

    /// Switches the field to `mode`.
    ///
    /// If the write succeeds but the refetch after it fails, the written
    /// dimension is still recorded and the refetch error is returned.
    pub async fn set_mode(&mut self, mode: Mode) -> Result<()> {
        let field = self.metadata.field(self.location.field)?;
        debug!("set mode; field={} mode={mode}", field.id);

        self.save_status = SaveStatus::Saving;
        let controller = Controller::new(&*self.repository, &*self.mutations, &self.config);
        let result = controller.set_mode(&self.metadata, field, mode).await;
        self.apply_transition(result)
    }

    /// Points the field at an explicitly chosen FK target field.
    pub async fn set_foreign_target(&mut self, target: FieldId) -> Result<()> {
        let field = self.metadata.field(self.location.field)?;
        debug!("set foreign target; field={} target={target}", field.id);

        self.save_status = SaveStatus::Saving;
        let controller = Controller::new(&*self.repository, &*self.mutations, &self.config);
        let result = controller
            .set_foreign_target(&self.metadata, field, target)
            .await;
        self.apply_transition(result)
    }

    /// Opens the field's remapping table for editing.
    ///
    /// If some values have no mapping yet, the seeded buffer is persisted
    /// before it is returned.
    pub async fn begin_editing(&mut self) -> Result<EditBuffer> {
        let field = self.metadata.field(self.location.field)?;
        if mode::resolve_mode(field) != Mode::Custom {
            return Err(Error::invalid_remapping_target(format!(
                "field {} does not use custom mappings",
                field.id
            )));
        }

        if !field.remapping.has_unset() {
            return Ok(EditBuffer::seed(&field.remapping));
        }

        self.save_status = SaveStatus::Saving;
        let result =
            remapping::repair_if_incomplete(field.id, &field.remapping, &*self.mutations).await;

        match result {
            Ok(repair) => {
                self.save_status = SaveStatus::Saved;
                self.store_remappings(&repair.buffer)?;
                Ok(repair.buffer)
            }
            Err(err) => {
                self.save_status = SaveStatus::Failed;
                Err(err)
            }
        }
    }

    /// Saves a complete buffer, replacing the stored remapping table.
    pub async fn save_remappings(&mut self, buffer: &EditBuffer) -> Result<()> {
        let field = self.field()?.id;

        // Checked here as well so an incomplete buffer never flips the
        // status to saving.
        if !buffer.is_savable() {
            return Err(Error::incomplete_remapping(buffer.empty_count()));
        }

        self.save_status = SaveStatus::Saving;
        match remapping::save(field, buffer, &*self.mutations).await {
            Ok(()) => {
                self.save_status = SaveStatus::Saved;
                self.store_remappings(buffer)
            }
            Err(err) => {
                self.save_status = SaveStatus::Failed;
                Err(err)
            }
        }
    }

    /// Refetches the field's table and re-runs the foreign transition if the
    /// field's FK now points somewhere else. The reset always writes a
    /// freshly computed default target.
    pub async fn refresh(&mut self) -> Result<()> {
        let previous = self.field()?.clone();

        let table = self.fetch_table().await?;
        self.metadata.apply_table(table);

        let current = self.metadata.field(self.location.field)?;
        let Some(mode) = transition::reset_for(&previous, current) else {
            return Ok(());
        };

        self.save_status = SaveStatus::Saving;
        let controller = Controller::new(&*self.repository, &*self.mutations, &self.config);
        let result = controller.reset(&self.metadata, current, mode).await;
        self.apply_transition(result)
    }

    async fn fetch_table(&self) -> Result<TableMetadata> {
        self.repository
            .fetch_table(self.location.table, self.config.force_reload)
            .await
    }

    fn apply_transition(&mut self, result: Result<Transition>) -> Result<()> {
        let transition = match result {
            Ok(transition) => transition,
            Err(err) => {
                self.save_status = SaveStatus::Failed;
                return Err(err);
            }
        };

        self.save_status = SaveStatus::Saved;
        self.metadata.field_mut(self.location.field)?.dimension = transition.dimension;

        match transition.refetched {
            Ok(table) => {
                self.metadata.apply_table(table);
                Ok(())
            }
            Err(err) => {
                warn!("refetch after dimension write failed; field={}", self.location.field);
                Err(err)
            }
        }
    }

    /// Mirrors a confirmed remapping write into the loaded metadata.
    fn store_remappings(&mut self, buffer: &EditBuffer) -> Result<()> {
        self.metadata.field_mut(self.location.field)?.remapping = buffer.to_table();
        Ok(())
    }
}
