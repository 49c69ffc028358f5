//! Declarative schema tables and the validation entry points.
//!
//! Every content type describes its shape once, as a static [`Table`] of
//! [`Field`]s. A single engine walks an untyped [`serde_yaml::Value`] against
//! that table and either rejects it with a path-qualified [`SchemaError`] or
//! moves it into its typed form, wrapped in [`Validated`].
//!
//! Checks run in a fixed order and stop at the first defect:
//!
//! 1. the value must be a mapping;
//! 2. required fields, in declaration order;
//! 3. optional fields that are present, in declaration order;
//! 4. nested records and groups, in declaration order.
//!
//! ```
//! use folio_content::{navbar::NavbarContent, schema};
//!
//! let raw: serde_yaml::Value = serde_yaml::from_str(
//!     "title: Daniel Zhou\ncontact_buttons:\n  - svgName: github\n    link: https://github.com/x\n",
//! )
//! .unwrap();
//!
//! let navbar = schema::validate::<NavbarContent>(raw).unwrap();
//! assert_eq!(navbar.title, "Daniel Zhou");
//! ```

mod engine;
pub mod error;
mod groups;

use std::ops::Deref;

use serde::{Serialize, de::DeserializeOwned};
use serde_yaml::Value;

pub use error::{ErrorKind, Expected, Problem, Result, SchemaError};
pub use groups::Groups;

/// The field table describing one record shape.
#[derive(Debug)]
pub struct Table {
    /// Context used when the caller does not supply one, e.g. `"Action button"`.
    pub label: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [Field],
}

impl Table {
    pub const fn new(label: &'static str, fields: &'static [Field]) -> Self {
        Self { label, fields }
    }
}

/// One entry of a [`Table`].
#[derive(Debug)]
pub struct Field {
    /// Key as written in the YAML file.
    pub name: &'static str,
    /// Whether the key must be present.
    pub required: bool,
    pub kind: Kind,
}

impl Field {
    pub const fn required(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    pub const fn optional(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }
}

/// Declared type of a field.
#[derive(Debug)]
pub enum Kind {
    /// A string. When required, the empty string counts as missing.
    Text,
    /// A sequence of strings; `noun` names the elements in error messages.
    TextList { noun: &'static str },
    /// A sequence of records checked against `table`.
    Records {
        table: &'static Table,
        segment: Segment,
    },
    /// A mapping from names to sequences of strings. `names` describes the
    /// keys, which may be any scalar and are read as strings.
    TextGroups {
        noun: &'static str,
        names: &'static str,
    },
    /// A mapping from names to sequences of records checked against `table`.
    RecordGroups {
        table: &'static Table,
        noun: &'static str,
        names: &'static str,
    },
}

/// How an element of a record sequence extends the parent context.
#[derive(Debug, Clone, Copy)]
pub enum Segment {
    /// `Projects` becomes `Projects[3]`.
    Index,
    /// `Navbar` becomes `Navbar contact_buttons[3]`.
    Named(&'static str),
}

impl Segment {
    fn extend(&self, context: &str, idx: usize) -> String {
        match self {
            Self::Index => format!("{context}[{idx}]"),
            Self::Named(name) => format!("{context} {name}[{idx}]"),
        }
    }
}

/// A typed content shape backed by a field table.
pub trait Schema: DeserializeOwned {
    const TABLE: &'static Table;
}

/// A value that passed its schema checks.
///
/// Only the validators in this module construct it, so holding a
/// `Validated<T>` means the underlying document was checked against
/// `T::TABLE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    /// Unwrap the validated value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Validated<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

/// Validate `raw` as `T`, using the table's own label as context.
pub fn validate<T: Schema>(raw: Value) -> Result<Validated<T>> {
    validate_in(raw, T::TABLE.label)
}

/// Validate `raw` as `T`, prefixing any error with `context`.
pub fn validate_in<T: Schema>(raw: Value, context: &str) -> Result<Validated<T>> {
    engine::check(T::TABLE, &raw, context, false)?;

    let value = serde_yaml::from_value(raw)
        .map_err(|e| SchemaError::new(context, Problem::Decode(e.to_string()), false))?;

    tracing::trace!(context, "validated");
    Ok(Validated(value))
}

/// Validate a standalone item, falling back to the table label when no
/// context is given.
pub fn validate_item<T: Schema>(raw: Value, context: Option<&str>) -> Result<Validated<T>> {
    validate_in(raw, context.unwrap_or(T::TABLE.label))
}

/// Run the table checks without decoding into a typed value.
pub fn check<T: Schema>(raw: &Value) -> Result<()> {
    engine::check(T::TABLE, raw, T::TABLE.label, false)
}
