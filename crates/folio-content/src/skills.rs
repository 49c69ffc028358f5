//! Skills page content (`skills.yml`).

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::schema::{self, Field, Groups, Kind, Result, Schema, Segment, Table, Validated};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsContent {
    pub description: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<Certificate>>,

    /// Icon names rendered as a strip above the skill groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skillicons: Option<Vec<String>>,

    /// Category name → skills, in file order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Groups<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub text: String,
    pub link: String,

    #[serde(rename = "svgName")]
    pub svg_name: String,
}

pub const CERTIFICATE: Table = Table::new(
    "Certificate",
    &[
        Field::required("text", Kind::Text),
        Field::required("link", Kind::Text),
        Field::required("svgName", Kind::Text),
    ],
);

pub const SKILLS: Table = Table::new(
    "Skills",
    &[
        Field::required(
            "description",
            Kind::TextList {
                noun: "description items",
            },
        ),
        Field::optional(
            "certificates",
            Kind::Records {
                table: &CERTIFICATE,
                segment: Segment::Named("certificates"),
            },
        ),
        Field::optional("skillicons", Kind::TextList { noun: "skillicons" }),
        Field::optional(
            "skills",
            Kind::TextGroups {
                noun: "skills",
                names: "skill group names",
            },
        ),
    ],
);

impl Schema for SkillsContent {
    const TABLE: &'static Table = &SKILLS;
}

impl Schema for Certificate {
    const TABLE: &'static Table = &CERTIFICATE;
}

impl SkillsContent {
    pub fn certificates(&self) -> &[Certificate] {
        self.certificates.as_deref().unwrap_or_default()
    }

    pub fn skillicons(&self) -> &[String] {
        self.skillicons.as_deref().unwrap_or_default()
    }

    /// Skill groups in file order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.skills.iter().flat_map(|groups| groups.iter())
    }
}

/// Validate a whole skills document.
pub fn validate_content(raw: Value) -> Result<Validated<SkillsContent>> {
    schema::validate(raw)
}

/// Validate one certificate, e.g. with context `Skills certificates[2]`.
pub fn validate_certificate(raw: Value, context: Option<&str>) -> Result<Validated<Certificate>> {
    schema::validate_item(raw, context)
}
