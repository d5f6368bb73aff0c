use super::{BaseType, Field, FieldId, SemanticType, TableId};

/// A foreign key of a table, together with every field of the table it
/// points at. This is what a query builder offers when joining through the
/// key.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyOption {
    /// The foreign key field on the source table
    pub field: FieldId,

    /// The table the foreign key points into
    pub target_table: TableId,

    /// One dimension per field of the target table, in display order
    pub dimensions: Vec<TargetDimension>,
}

/// A field of an FK target table viewed as a potential dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetDimension {
    pub field: FieldId,

    pub semantic_type: Option<SemanticType>,

    /// How the field would be bucketed if used as a dimension
    pub default_dimension: DefaultDimension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultDimension {
    /// The plain field value
    Field,

    /// A date/time field, bucketed by the given unit
    Datetime(TemporalUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalUnit {
    Minute,
    Day,
}

impl TargetDimension {
    pub fn for_field(field: &Field) -> TargetDimension {
        TargetDimension {
            field: field.id,
            semantic_type: field.semantic_type.clone(),
            default_dimension: DefaultDimension::for_base_type(field.base_type),
        }
    }

    pub fn is_datetime(&self) -> bool {
        self.default_dimension.is_datetime()
    }

    pub fn is_name(&self) -> bool {
        self.semantic_type
            .as_ref()
            .map(SemanticType::is_name)
            .unwrap_or(false)
    }
}

impl DefaultDimension {
    pub fn for_base_type(base_type: BaseType) -> DefaultDimension {
        match base_type {
            BaseType::Date | BaseType::DateTime => DefaultDimension::Datetime(TemporalUnit::Day),
            BaseType::Time => DefaultDimension::Datetime(TemporalUnit::Minute),
            _ => DefaultDimension::Field,
        }
    }

    pub fn is_datetime(&self) -> bool {
        matches!(self, Self::Datetime(_))
    }
}
