use std::fmt;

/// What a field's values mean, independent of how they are stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum SemanticType {
    /// `type/PK`
    PrimaryKey,

    /// `type/FK`
    ForeignKey,

    /// `type/Name`, the human readable name of an entity
    Name,

    /// `type/Category`
    Category,

    /// Any other semantic type, kept verbatim
    Other(String),
}

impl SemanticType {
    pub fn parse(name: &str) -> SemanticType {
        match name {
            "type/PK" => Self::PrimaryKey,
            "type/FK" => Self::ForeignKey,
            "type/Name" => Self::Name,
            "type/Category" => Self::Category,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::PrimaryKey => "type/PK",
            Self::ForeignKey => "type/FK",
            Self::Name => "type/Name",
            Self::Category => "type/Category",
            Self::Other(name) => name,
        }
    }

    pub fn is_foreign_key(&self) -> bool {
        matches!(self, Self::ForeignKey)
    }

    pub fn is_name(&self) -> bool {
        matches!(self, Self::Name)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SemanticType {
    fn from(value: &str) -> Self {
        SemanticType::parse(value)
    }
}

impl From<String> for SemanticType {
    fn from(value: String) -> Self {
        SemanticType::parse(&value)
    }
}

impl From<SemanticType> for String {
    fn from(value: SemanticType) -> Self {
        match value {
            SemanticType::Other(name) => name,
            ty => ty.as_str().to_string(),
        }
    }
}
