//! Projects page content (`project.yml`).

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::{
    action_button::{ACTION_BUTTON, ActionButtonField},
    schema::{self, Field, Kind, Result, Schema, Segment, Table, Validated},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContent {
    pub description: Vec<String>,
    pub projects: Vec<ProjectItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_description: Option<String>,

    /// Free-form date label, e.g. "Jan 2024 - Present".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Names of technology icons shown on the card.
    #[serde(rename = "svgIcons", skip_serializing_if = "Option::is_none")]
    pub svg_icons: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionButtonField>>,
}

pub const PROJECT_ITEM: Table = Table::new(
    "Project",
    &[
        Field::required("name", Kind::Text),
        Field::required("description", Kind::Text),
        Field::optional("additional_description", Kind::Text),
        Field::optional("date", Kind::Text),
        Field::optional("svgIcons", Kind::TextList { noun: "svgIcons" }),
        Field::optional(
            "actions",
            Kind::Records {
                table: &ACTION_BUTTON,
                segment: Segment::Named("action"),
            },
        ),
    ],
);

pub const PROJECTS: Table = Table::new(
    "Projects",
    &[
        Field::required(
            "description",
            Kind::TextList {
                noun: "description items",
            },
        ),
        Field::required(
            "projects",
            Kind::Records {
                table: &PROJECT_ITEM,
                segment: Segment::Index,
            },
        ),
    ],
);

impl Schema for ProjectContent {
    const TABLE: &'static Table = &PROJECTS;
}

impl Schema for ProjectItem {
    const TABLE: &'static Table = &PROJECT_ITEM;
}

impl ProjectItem {
    /// Action buttons, empty when none are configured.
    pub fn actions(&self) -> &[ActionButtonField] {
        self.actions.as_deref().unwrap_or_default()
    }

    pub fn svg_icons(&self) -> &[String] {
        self.svg_icons.as_deref().unwrap_or_default()
    }
}

/// Validate a whole projects document.
pub fn validate_content(raw: Value) -> Result<Validated<ProjectContent>> {
    schema::validate(raw)
}

/// Validate one project, e.g. with context `Projects[3]`.
pub fn validate_item(raw: Value, context: Option<&str>) -> Result<Validated<ProjectItem>> {
    schema::validate_item(raw, context)
}
