//! Form schema handling: the component tree consumed from the form builder,
//! flattening of layout containers into leaf fields, the field-type to
//! column-type mapping, and DDL synthesis for the per-form submission tables.

use serde::{Deserialize, Serialize};

pub mod column_type;
pub mod ddl;
pub mod flatten;

pub use column_type::{ColumnType, map_field_type};
pub use flatten::{FieldDescriptor, flatten};

/// Top-level shape of a form-builder schema. Only the pieces the backend
/// cares about are modeled; everything else rides along untouched because
/// the raw JSON is what gets persisted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub components: Vec<Component>,
}

/// One node of the component tree. Layout containers carry nested
/// components (`panel`, `fieldset`, `datagrid`) or column groups
/// (`columns`); everything else is a leaf data field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnGroup>,
}

/// One column of a `columns` layout container.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnGroup {
    #[serde(default)]
    pub components: Vec<Component>,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error(
        "invalid identifier `{0}`: must be ASCII alphanumeric or underscore, \
         must not start with a digit, and must be at most 64 characters"
    )]
    InvalidIdentifier(String),

    #[error("`{0}` is a reserved column name")]
    ReservedIdentifier(String),

    #[error(
        "form id `{0}` is too long: the derived submission table name \
         would exceed MySQL's 64-character identifier limit"
    )]
    FormIdTooLong(String),

    #[error("malformed form schema: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FormSchema {
    /// Parses the raw JSON blob received from the form builder.
    pub fn parse(raw: &serde_json::Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(raw.clone())?)
    }
}
