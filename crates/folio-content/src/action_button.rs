//! Action buttons attached to projects and experiences.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::schema::{self, Field, Kind, Result, Schema, Table, Validated};

/// A call-to-action button: a link, a downloadable asset, or a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButtonField {
    /// Button label.
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    /// Accent colour name understood by the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

pub const ACTION_BUTTON: Table = Table::new(
    "Action button",
    &[
        Field::required("text", Kind::Text),
        Field::optional("link", Kind::Text),
        Field::optional("asset", Kind::Text),
        Field::optional("video", Kind::Text),
        Field::optional("color", Kind::Text),
    ],
);

impl Schema for ActionButtonField {
    const TABLE: &'static Table = &ACTION_BUTTON;
}

/// Validate a single action button.
pub fn validate_action_button(
    raw: Value,
    context: Option<&str>,
) -> Result<Validated<ActionButtonField>> {
    schema::validate_item(raw, context)
}
