/// Storage type of a field's column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseType {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    Time,
    #[default]
    Unknown,
}
