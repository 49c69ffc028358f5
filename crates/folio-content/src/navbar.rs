//! Navigation bar content (`navbar.yml`).

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::schema::{self, Field, Kind, Result, Schema, Segment, Table, Validated};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarContent {
    /// Site name shown at the left of the bar.
    pub title: String,

    pub contact_buttons: Vec<ContactButton>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_links: Option<Vec<ExternalLink>>,
}

/// An icon button linking to a profile or mail address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactButton {
    #[serde(rename = "svgName")]
    pub svg_name: String,
    pub link: String,
}

/// A text link in the bar; points either at a URL or a bundled asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
}

pub const CONTACT_BUTTON: Table = Table::new(
    "Contact button",
    &[
        Field::required("svgName", Kind::Text),
        Field::required("link", Kind::Text),
    ],
);

pub const EXTERNAL_LINK: Table = Table::new(
    "External link",
    &[
        Field::required("title", Kind::Text),
        Field::optional("link", Kind::Text),
        Field::optional("asset", Kind::Text),
    ],
);

pub const NAVBAR: Table = Table::new(
    "Navbar",
    &[
        Field::required("title", Kind::Text),
        Field::required(
            "contact_buttons",
            Kind::Records {
                table: &CONTACT_BUTTON,
                segment: Segment::Named("contact_buttons"),
            },
        ),
        Field::optional(
            "external_links",
            Kind::Records {
                table: &EXTERNAL_LINK,
                segment: Segment::Named("external_links"),
            },
        ),
    ],
);

impl Schema for NavbarContent {
    const TABLE: &'static Table = &NAVBAR;
}

impl Schema for ContactButton {
    const TABLE: &'static Table = &CONTACT_BUTTON;
}

impl Schema for ExternalLink {
    const TABLE: &'static Table = &EXTERNAL_LINK;
}

impl NavbarContent {
    pub fn external_links(&self) -> &[ExternalLink] {
        self.external_links.as_deref().unwrap_or_default()
    }
}

/// Validate a whole navbar document.
pub fn validate_content(raw: Value) -> Result<Validated<NavbarContent>> {
    schema::validate(raw)
}

/// Validate one contact button, e.g. with context `Navbar contact_buttons[0]`.
pub fn validate_contact_button(
    raw: Value,
    context: Option<&str>,
) -> Result<Validated<ContactButton>> {
    schema::validate_item(raw, context)
}

/// Validate one external link, e.g. with context `Navbar external_links[0]`.
pub fn validate_external_link(
    raw: Value,
    context: Option<&str>,
) -> Result<Validated<ExternalLink>> {
    schema::validate_item(raw, context)
}
