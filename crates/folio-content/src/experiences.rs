//! Experiences page content (`experiences.yml`).

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::{
    action_button::{ACTION_BUTTON, ActionButtonField},
    schema::{self, Field, Kind, Result, Schema, Segment, Table, Validated},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperiencesContent {
    pub description: Vec<String>,
    pub experiences: Vec<ExperienceItem>,
}

/// A role or position on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub name: String,

    /// Bullet points describing the role.
    pub description: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Timeline marker colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ActionButtonField>>,
}

pub const EXPERIENCE_ITEM: Table = Table::new(
    "Experience",
    &[
        Field::required("name", Kind::Text),
        Field::required("description", Kind::TextList { noun: "descriptions" }),
        Field::optional("date", Kind::Text),
        Field::optional("color", Kind::Text),
        Field::optional(
            "actions",
            Kind::Records {
                table: &ACTION_BUTTON,
                segment: Segment::Named("action"),
            },
        ),
    ],
);

pub const EXPERIENCES: Table = Table::new(
    "Experiences",
    &[
        Field::required(
            "description",
            Kind::TextList {
                noun: "description items",
            },
        ),
        Field::required(
            "experiences",
            Kind::Records {
                table: &EXPERIENCE_ITEM,
                segment: Segment::Index,
            },
        ),
    ],
);

impl Schema for ExperiencesContent {
    const TABLE: &'static Table = &EXPERIENCES;
}

impl Schema for ExperienceItem {
    const TABLE: &'static Table = &EXPERIENCE_ITEM;
}

impl ExperienceItem {
    pub fn actions(&self) -> &[ActionButtonField] {
        self.actions.as_deref().unwrap_or_default()
    }
}

/// Validate a whole experiences document.
pub fn validate_content(raw: Value) -> Result<Validated<ExperiencesContent>> {
    schema::validate(raw)
}

/// Validate one experience, e.g. with context `Experiences[1]`.
pub fn validate_item(raw: Value, context: Option<&str>) -> Result<Validated<ExperienceItem>> {
    schema::validate_item(raw, context)
}
