//! Side effects of switching a field between display-value modes

use crate::{
    fk,
    mode::{self, Mode},
    Config,
};

use fieldmap_core::{
    schema::{Dimension, DimensionSpec, Field, FieldId, TableMetadata},
    Error, FieldMutations, Metadata, MetadataRepository, Result,
};
use log::{debug, info};

/// A dimension write the service accepted, and the refetch that followed.
///
/// The write is confirmed even when `refetched` is an error; callers must
/// still record `dimension` locally.
#[derive(Debug)]
pub struct Transition {
    /// The dimension now stored for the field
    pub dimension: Dimension,

    /// The owning table as fetched after the write
    pub refetched: Result<TableMetadata>,
}

/// Executes mode transitions for one field against the metadata service.
///
/// Every transition is a dimension write followed by a forced refetch of
/// the owning table. The refetch is only issued once the write resolved, so
/// it observes the new dimension. A rejected write returns an error and
/// leaves nothing to apply; a failed refetch is reported inside the
/// [`Transition`] of the write it followed.
#[derive(Debug)]
pub struct Controller<'a> {
    repository: &'a dyn MetadataRepository,
    mutations: &'a dyn FieldMutations,
    config: &'a Config,
}

impl<'a> Controller<'a> {
    pub fn new(
        repository: &'a dyn MetadataRepository,
        mutations: &'a dyn FieldMutations,
        config: &'a Config,
    ) -> Controller<'a> {
        Controller {
            repository,
            mutations,
            config,
        }
    }

    /// Switches `field` to `mode`.
    ///
    /// Fails with `InvalidRemappingTarget` if the mode is not among the
    /// field's available modes.
    pub async fn set_mode(
        &self,
        metadata: &Metadata,
        field: &Field,
        mode: Mode,
    ) -> Result<Transition> {
        let preserve = self.config.preserve_explicit_target;
        self.transition(metadata, field, mode, preserve).await
    }

    /// Re-runs the transition for a field whose FK target changed.
    ///
    /// The current external target belongs to the old target, so a fresh
    /// default is always computed regardless of `preserve_explicit_target`.
    pub async fn reset(
        &self,
        metadata: &Metadata,
        field: &Field,
        mode: Mode,
    ) -> Result<Transition> {
        self.transition(metadata, field, mode, false).await
    }

    /// Points a foreign-mode field at an explicitly chosen target.
    pub async fn set_foreign_target(
        &self,
        metadata: &Metadata,
        field: &Field,
        target: FieldId,
    ) -> Result<Transition> {
        if mode::resolve_mode(field) != Mode::Foreign {
            return Err(Error::invalid_remapping_target(format!(
                "field {} is not remapped through its foreign key",
                field.id
            )));
        }

        let candidates = fk::candidates(field, metadata)?;
        fk::validate_target(&candidates, target, metadata)?;

        debug!("writing external dimension; field={} target={target}", field.id);
        let spec = DimensionSpec::external(field.display_name(), Some(target));
        self.write(field, Some(spec)).await
    }

    async fn transition(
        &self,
        metadata: &Metadata,
        field: &Field,
        mode: Mode,
        preserve: bool,
    ) -> Result<Transition> {
        if !mode::is_available(field, mode) {
            return Err(Error::invalid_remapping_target(format!(
                "mode `{mode}` is not available for field {}",
                field.id
            )));
        }

        let spec = match mode {
            Mode::Original => {
                debug!("deleting dimension; field={}", field.id);
                None
            }
            Mode::Foreign => {
                let target = foreign_target(metadata, field, preserve)?;
                debug!("writing external dimension; field={} target={target:?}", field.id);
                Some(DimensionSpec::external(field.display_name(), target))
            }
            Mode::Custom => {
                debug!("writing internal dimension; field={}", field.id);
                Some(DimensionSpec::internal(field.display_name()))
            }
        };

        self.write(field, spec).await
    }

    /// Writes `spec`, or deletes the dimension for `None`, then refetches.
    async fn write(&self, field: &Field, spec: Option<DimensionSpec>) -> Result<Transition> {
        let dimension = match spec {
            Some(spec) => {
                let dimension = Dimension::from(&spec);
                self.mutations.update_field_dimension(field.id, spec).await?;
                dimension
            }
            None => {
                self.mutations.delete_field_dimension(field.id).await?;
                Dimension::None
            }
        };

        debug!("refetching table; table={}", field.table);
        let refetched = self
            .repository
            .fetch_table(field.table, self.config.force_reload)
            .await;

        Ok(Transition {
            dimension,
            refetched,
        })
    }
}

/// Picks the target written when entering foreign mode.
///
/// With `preserve`, a current external target that is still a candidate is
/// kept.
fn foreign_target(metadata: &Metadata, field: &Field, preserve: bool) -> Result<Option<FieldId>> {
    let candidates = fk::candidates(field, metadata)?;

    if preserve {
        if let Some(current) = field.dimension.external_target() {
            if fk::contains_target(&candidates, current) {
                return Ok(Some(current));
            }
        }
    }

    Ok(fk::default_target(&candidates))
}

/// Decides whether a metadata change invalidates a foreign-mode field.
///
/// `previous` is the field as last loaded and `current` as just refetched.
/// When a field in foreign mode is still a foreign key but now points at a
/// different field, its external dimension refers to the old target table:
/// the result is `Some(Mode::Foreign)` to recompute the target, or
/// `Some(Mode::Original)` if the key no longer points anywhere.
pub fn reset_for(previous: &Field, current: &Field) -> Option<Mode> {
    if mode::resolve_mode(previous) != Mode::Foreign || !current.is_foreign_key() {
        return None;
    }

    if current.fk_target_field_id == previous.fk_target_field_id {
        return None;
    }

    info!(
        "foreign key target changed; field={} from={:?} to={:?}",
        current.id, previous.fk_target_field_id, current.fk_target_field_id
    );

    Some(match current.fk_target_field_id {
        Some(_) => Mode::Foreign,
        None => Mode::Original,
    })
}
