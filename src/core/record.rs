//! Record model for one extracted code entity.
//!
//! A [`Record`] is one row of the extraction table. Records are built once by
//! the reader and never mutated afterwards; every textual column is a plain
//! `String` so that blank checks downstream are uniform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of an extracted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Class,
    Method,
    Field,
    Enum,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Class,
        EntityKind::Method,
        EntityKind::Field,
        EntityKind::Enum,
    ];

    /// Lowercase name as it appears in the extraction table.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Method => "method",
            EntityKind::Field => "field",
            EntityKind::Enum => "enum",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a kind column holds an unknown value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized kind '{}' (expected one of class, method, field, enum)",
            self.0
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for EntityKind {
    type Err = UnknownKind;

    // Case-insensitive, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Fully qualified name of an entity, used as the join key between a class
/// and its children.
///
/// Matching is exact: no case folding, no whitespace trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Parse a parent column. Blank text means "no enclosing class".
    pub fn parent_of(raw: &str) -> Option<Self> {
        if is_blank(raw) {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// True when the text is empty or whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// One extracted code entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub simple_name: String,
    pub kind: EntityKind,
    pub name: QualifiedName,
    pub definition: String,
    pub javadoc: String,
    /// Enclosing class; `None` for top-level classes.
    pub parent: Option<QualifiedName>,
    /// Only meaningful for classes.
    pub import_body: String,
    pub body: String,
}

impl Record {
    /// Column names of the extraction table, in order.
    pub const HEADERS: [&'static str; 8] = [
        "Name",
        "Type",
        "FullName",
        "Definition",
        "JavaDoc",
        "Parent",
        "Imports",
        "Body",
    ];

    /// Number of columns every data row must have.
    pub const WIDTH: usize = Self::HEADERS.len();

    /// Start a record of the given kind with every text column empty.
    pub fn new(kind: EntityKind, simple_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            kind,
            name: QualifiedName::new(name),
            definition: String::new(),
            javadoc: String::new(),
            parent: None,
            import_body: String::new(),
            body: String::new(),
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn with_javadoc(mut self, javadoc: impl Into<String>) -> Self {
        self.javadoc = javadoc.into();
        self
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = QualifiedName::parent_of(parent);
        self
    }

    pub fn with_imports(mut self, import_body: impl Into<String>) -> Self {
        self.import_body = import_body.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// A class with no enclosing parent; a traversal root.
    pub fn is_top_level_class(&self) -> bool {
        self.kind == EntityKind::Class && self.parent.is_none()
    }

    pub fn has_javadoc(&self) -> bool {
        !is_blank(&self.javadoc)
    }

    pub fn has_imports(&self) -> bool {
        !is_blank(&self.import_body)
    }

    /// Render back into an extraction-table row, kind in lowercase.
    pub fn to_row(&self) -> [&str; 8] {
        [
            &self.simple_name,
            self.kind.as_str(),
            self.name.as_str(),
            &self.definition,
            &self.javadoc,
            self.parent.as_ref().map_or("", QualifiedName::as_str),
            &self.import_body,
            &self.body,
        ]
    }
}
