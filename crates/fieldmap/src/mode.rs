//! Display-value modes and how they are derived from field metadata

use fieldmap_core::{
    schema::{Dimension, Field},
    Error, Result,
};
use std::{fmt, str::FromStr};

/// How a field's values are displayed.
///
/// Variants are declared in display order, which is also the tie-break
/// order when a default selection is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Show the raw value
    Original,

    /// Show a value looked up through the field's foreign key
    Foreign,

    /// Show a custom string per value
    Custom,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Original, Mode::Foreign, Mode::Custom];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Original => "original",
            Mode::Foreign => "foreign",
            Mode::Custom => "custom",
        }
    }

    /// User facing name of the mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Original => "Use original value",
            Mode::Foreign => "Use foreign key",
            Mode::Custom => "Custom mapping",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Mode> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::unrecognized_mapping_type(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the current mode from the field's dimension.
pub fn resolve_mode(field: &Field) -> Mode {
    match field.dimension {
        Dimension::None => Mode::Original,
        Dimension::External { .. } => Mode::Foreign,
        Dimension::Internal => Mode::Custom,
    }
}

/// Modes the field may be switched to, in display order.
///
/// * `original` is always available.
/// * `foreign` needs a foreign key that points at a field.
/// * `custom` needs at least one known value, and only numeric-coded values
///   can be given custom labels.
pub fn available_modes(field: &Field) -> Vec<Mode> {
    Mode::ALL
        .into_iter()
        .filter(|mode| is_available(field, *mode))
        .collect()
}

pub fn is_available(field: &Field, mode: Mode) -> bool {
    match mode {
        Mode::Original => true,
        Mode::Foreign => field.foreign_key_target().is_some(),
        Mode::Custom => !field.remapping.is_empty() && field.remapping.has_only_numeric_keys(),
    }
}
