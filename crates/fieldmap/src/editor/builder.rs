use super::{FieldEditor, FieldLocation};
use crate::{Config, Result};

use fieldmap_core::{FieldMutations, MetadataRepository};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Keep an existing, still valid external target when foreign mode is
    /// selected again. Off by default, in which case the default target is
    /// recomputed on every switch.
    pub fn preserve_explicit_target(&mut self, value: bool) -> &mut Self {
        self.config.preserve_explicit_target = value;
        self
    }

    /// Bypass repository caches on table fetches. On by default.
    pub fn force_reload(&mut self, value: bool) -> &mut Self {
        self.config.force_reload = value;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds an editor on a backend that serves both reads and writes, and
    /// loads its metadata.
    pub async fn build<B>(&self, backend: Arc<B>, location: FieldLocation) -> Result<FieldEditor>
    where
        B: MetadataRepository + FieldMutations,
    {
        self.build_with(backend.clone(), backend, location).await
    }

    /// Builds an editor on separate read and write services, and loads its
    /// metadata.
    pub async fn build_with(
        &self,
        repository: Arc<dyn MetadataRepository>,
        mutations: Arc<dyn FieldMutations>,
        location: FieldLocation,
    ) -> Result<FieldEditor> {
        let mut editor = FieldEditor::new(repository, mutations, self.config.clone(), location);
        editor.load().await?;
        Ok(editor)
    }
}
