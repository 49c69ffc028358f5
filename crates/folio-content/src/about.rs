//! Home page content (`aboutme.yml`).

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::schema::{self, Field, Groups, Kind, Result, Schema, Table, Validated};

/// Title, introduction and the named sections of the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,

    /// Introductory paragraphs.
    pub description: Vec<String>,

    /// Section heading → entries, in file order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<Groups<AboutItem>>,
}

/// One entry of an about section, optionally with an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutItem {
    pub text: String,

    #[serde(rename = "svgName", skip_serializing_if = "Option::is_none")]
    pub svg_name: Option<String>,
}

pub const ABOUT_ITEM: Table = Table::new(
    "About item",
    &[
        Field::required("text", Kind::Text),
        Field::optional("svgName", Kind::Text),
    ],
);

pub const ABOUT: Table = Table::new(
    "About",
    &[
        Field::required("title", Kind::Text),
        Field::required(
            "description",
            Kind::TextList {
                noun: "description items",
            },
        ),
        Field::optional(
            "about",
            Kind::RecordGroups {
                table: &ABOUT_ITEM,
                noun: "about sections",
                names: "about section names",
            },
        ),
    ],
);

impl Schema for AboutContent {
    const TABLE: &'static Table = &ABOUT;
}

impl Schema for AboutItem {
    const TABLE: &'static Table = &ABOUT_ITEM;
}

impl AboutContent {
    /// Sections in file order; empty when the document has none.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[AboutItem])> {
        self.about.iter().flat_map(|groups| groups.iter())
    }
}

/// Validate a whole about document.
pub fn validate_content(raw: Value) -> Result<Validated<AboutContent>> {
    schema::validate(raw)
}

/// Validate one about item, e.g. with context `About["Header"][2]`.
pub fn validate_item(raw: Value, context: Option<&str>) -> Result<Validated<AboutItem>> {
    schema::validate_item(raw, context)
}
