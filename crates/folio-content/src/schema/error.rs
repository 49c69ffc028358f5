//! Structural errors reported by the schema engine.

use std::fmt;

use thiserror::Error;

/// Result type alias using `SchemaError`.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// The shape a field was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A YAML string.
    String,
    /// A YAML sequence.
    Array,
    /// A YAML mapping.
    Object,
}

impl Expected {
    /// Name used after "as" in `requires <field> as <type>`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Name with its article, as in `<field> must be <a type>`.
    pub fn with_article(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a structural defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is absent, null, or an empty string.
    MissingRequiredField,
    /// A field is present but not of its declared type.
    WrongFieldType,
    /// The value itself is not the container kind it should be.
    WrongContainerKind,
    /// Any of the above, found inside a nested item.
    NestedItemInvalid,
}

/// The defect found at a context path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Problem {
    #[error("must be an object")]
    NotAnObject,

    #[error("must be an array")]
    NotAnArray,

    #[error("requires {field} as {expected}")]
    Missing {
        field: &'static str,
        expected: Expected,
    },

    /// A required field is present but holds the wrong type.
    #[error("requires {field} as {expected}")]
    Mistyped {
        field: &'static str,
        expected: Expected,
    },

    #[error("{field} must be {}", .expected.with_article())]
    WrongType {
        field: &'static str,
        expected: Expected,
    },

    /// An optional mapping was given something other than a mapping.
    #[error("{noun} must be an object")]
    NotAMapping { noun: &'static str },

    #[error("all {noun} must be strings")]
    NonStringItems { noun: &'static str },

    /// A group key is a mapping, a sequence, or null.
    #[error("all {names} must be strings")]
    NonStringKeys { names: &'static str },

    /// The value passed every table check but could not be decoded into its
    /// typed form.
    #[error("{0}")]
    Decode(String),
}

/// A schema mismatch, rendered as `"<context>: <problem>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: {problem}")]
pub struct SchemaError {
    context: String,
    problem: Problem,
    nested: bool,
}

impl SchemaError {
    pub(crate) fn new(context: &str, problem: Problem, nested: bool) -> Self {
        Self {
            context: context.to_string(),
            problem,
            nested,
        }
    }

    /// Path of the value that failed, e.g. `Projects[0] action[1]`.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The defect itself, without the context prefix.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Whether the defect was found below the validated root.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// The kind of defect, ignoring where it was found.
    pub fn defect(&self) -> ErrorKind {
        match &self.problem {
            Problem::Missing { .. } => ErrorKind::MissingRequiredField,
            Problem::NotAnObject | Problem::NotAnArray => ErrorKind::WrongContainerKind,
            Problem::Mistyped { .. }
            | Problem::WrongType { .. }
            | Problem::NotAMapping { .. }
            | Problem::NonStringItems { .. }
            | Problem::NonStringKeys { .. }
            | Problem::Decode(_) => ErrorKind::WrongFieldType,
        }
    }

    /// Classification of this error; nested defects report `NestedItemInvalid`.
    pub fn kind(&self) -> ErrorKind {
        if self.nested {
            ErrorKind::NestedItemInvalid
        } else {
            self.defect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_context_and_problem() {
        let err = SchemaError::new(
            "About",
            Problem::Missing {
                field: "description",
                expected: Expected::Array,
            },
            false,
        );
        assert_eq!(err.to_string(), "About: requires description as array");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
    }

    #[test]
    fn test_wrong_type_uses_article() {
        let err = SchemaError::new(
            "Project",
            Problem::WrongType {
                field: "actions",
                expected: Expected::Array,
            },
            false,
        );
        assert_eq!(err.to_string(), "Project: actions must be an array");
    }

    #[test]
    fn test_nested_kind() {
        let err = SchemaError::new("Projects[0]", Problem::NotAnObject, true);
        assert_eq!(err.kind(), ErrorKind::NestedItemInvalid);
        assert_eq!(err.defect(), ErrorKind::WrongContainerKind);
        assert_eq!(err.context(), "Projects[0]");
    }

    #[test]
    fn test_item_messages() {
        let err = SchemaError::new(
            r#"Skills["Languages"]"#,
            Problem::NonStringItems { noun: "items" },
            true,
        );
        assert_eq!(
            err.to_string(),
            r#"Skills["Languages"]: all items must be strings"#
        );
    }
}
