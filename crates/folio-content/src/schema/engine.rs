//! Table-driven structural checks over `serde_yaml::Value`.

use serde_yaml::{Mapping, Value};

use super::{
    Field, Kind, Table,
    error::{Expected, Problem, Result, SchemaError},
};

/// Check `value` against `table`, reporting failures under `context`.
pub(super) fn check(table: &Table, value: &Value, context: &str, nested: bool) -> Result<()> {
    let fail = |problem| SchemaError::new(context, problem, nested);

    let Some(map) = value.as_mapping() else {
        return Err(fail(Problem::NotAnObject));
    };

    for field in table.fields.iter().filter(|f| f.required) {
        check_required(field, present(map, field.name)).map_err(fail)?;
    }

    for field in table.fields.iter().filter(|f| !f.required) {
        if let Some(value) = present(map, field.name) {
            check_optional(field, value).map_err(fail)?;
        }
    }

    for field in table.fields {
        if let Some(value) = present(map, field.name) {
            descend(&field.kind, value, context)?;
        }
    }

    Ok(())
}

/// Look up a key, treating an explicit `null` as absent.
fn present<'a>(map: &'a Mapping, name: &str) -> Option<&'a Value> {
    map.get(name).filter(|v| !v.is_null())
}

fn check_required(field: &Field, value: Option<&Value>) -> std::result::Result<(), Problem> {
    let name = field.name;
    let expected = expected_for(&field.kind);

    let Some(value) = value else {
        return Err(Problem::Missing {
            field: name,
            expected,
        });
    };

    match (&field.kind, value) {
        (Kind::Text, Value::String(s)) if s.is_empty() => Err(Problem::Missing {
            field: name,
            expected,
        }),
        (Kind::Text, Value::String(_)) => Ok(()),
        (Kind::TextList { noun }, Value::Sequence(seq)) => all_strings(seq, *noun),
        (Kind::Records { .. }, Value::Sequence(_)) => Ok(()),
        (
            Kind::TextGroups { names, .. } | Kind::RecordGroups { names, .. },
            Value::Mapping(map),
        ) => scalar_keys(map, *names),
        _ => Err(Problem::Mistyped {
            field: name,
            expected,
        }),
    }
}

fn check_optional(field: &Field, value: &Value) -> std::result::Result<(), Problem> {
    let name = field.name;

    match (&field.kind, value) {
        (Kind::Text, Value::String(_)) => Ok(()),
        (Kind::TextList { noun }, Value::Sequence(seq)) => all_strings(seq, *noun),
        (Kind::Records { .. }, Value::Sequence(_)) => Ok(()),
        (
            Kind::TextGroups { names, .. } | Kind::RecordGroups { names, .. },
            Value::Mapping(map),
        ) => scalar_keys(map, *names),
        (Kind::TextGroups { noun, .. } | Kind::RecordGroups { noun, .. }, _) => {
            Err(Problem::NotAMapping { noun: *noun })
        }
        (kind, _) => Err(Problem::WrongType {
            field: name,
            expected: expected_for(kind),
        }),
    }
}

/// Recurse into nested records and groups. Shapes were checked already.
fn descend(kind: &Kind, value: &Value, context: &str) -> Result<()> {
    match (kind, value) {
        (Kind::Records { table, segment }, Value::Sequence(seq)) => {
            for (idx, item) in seq.iter().enumerate() {
                check(table, item, &segment.extend(context, idx), true)?;
            }
        }
        (Kind::TextGroups { .. }, Value::Mapping(map)) => {
            for (key, values) in map {
                let group = group_context(context, key);
                let items = group_items(values, &group)?;
                all_strings(items, "items")
                    .map_err(|problem| SchemaError::new(&group, problem, true))?;
            }
        }
        (Kind::RecordGroups { table, .. }, Value::Mapping(map)) => {
            for (key, values) in map {
                let group = group_context(context, key);
                for (idx, item) in group_items(values, &group)?.iter().enumerate() {
                    check(table, item, &format!("{group}[{idx}]"), true)?;
                }
            }
        }
        _ => {}
    }

    Ok(())
}

fn group_items<'a>(values: &'a Value, group: &str) -> Result<&'a [Value]> {
    values
        .as_sequence()
        .map(Vec::as_slice)
        .ok_or_else(|| SchemaError::new(group, Problem::NotAnArray, true))
}

/// `Skills` and key `Languages` become `Skills["Languages"]`.
fn group_context(context: &str, key: &Value) -> String {
    format!("{context}[\"{}\"]", key_name(key).unwrap_or_default())
}

/// The string form of a group key. Numbers and booleans are accepted as
/// names, so `2023:` names the group `"2023"`.
pub(super) fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_name(n)),
        _ => None,
    }
}

fn number_name(n: &serde_yaml::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}

fn all_strings(items: &[Value], noun: &'static str) -> std::result::Result<(), Problem> {
    if items.iter().all(Value::is_string) {
        Ok(())
    } else {
        Err(Problem::NonStringItems { noun })
    }
}

fn scalar_keys(map: &Mapping, names: &'static str) -> std::result::Result<(), Problem> {
    if map.keys().all(|key| key_name(key).is_some()) {
        Ok(())
    } else {
        Err(Problem::NonStringKeys { names })
    }
}

fn expected_for(kind: &Kind) -> Expected {
    match kind {
        Kind::Text => Expected::String,
        Kind::TextList { .. } | Kind::Records { .. } => Expected::Array,
        Kind::TextGroups { .. } | Kind::RecordGroups { .. } => Expected::Object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Segment;

    const ITEM: Table = Table::new(
        "Item",
        &[
            Field::required("text", Kind::Text),
            Field::optional("link", Kind::Text),
        ],
    );

    const DOC: Table = Table::new(
        "Doc",
        &[
            Field::required("title", Kind::Text),
            Field::required(
                "description",
                Kind::TextList {
                    noun: "description items",
                },
            ),
            Field::optional(
                "items",
                Kind::Records {
                    table: &ITEM,
                    segment: Segment::Index,
                },
            ),
            Field::optional(
                "tags",
                Kind::TextGroups {
                    noun: "tags",
                    names: "tag names",
                },
            ),
            Field::optional(
                "sections",
                Kind::RecordGroups {
                    table: &ITEM,
                    noun: "sections",
                    names: "section names",
                },
            ),
        ],
    );

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).expect("yaml")
    }

    fn check_doc(src: &str) -> Result<()> {
        check(&DOC, &yaml(src), "Doc", false)
    }

    fn message(src: &str) -> String {
        check_doc(src).unwrap_err().to_string()
    }

    #[test]
    fn test_minimal_document() {
        check_doc("title: t\ndescription: []").expect("valid");
    }

    #[test]
    fn test_non_mapping_root() {
        assert_eq!(message("- a"), "Doc: must be an object");
        assert_eq!(message("just text"), "Doc: must be an object");
        assert_eq!(message("~"), "Doc: must be an object");
    }

    #[test]
    fn test_required_text_missing_null_or_empty() {
        let expected = "Doc: requires title as string";
        assert_eq!(message("description: []"), expected);
        assert_eq!(message("title: ~\ndescription: []"), expected);
        assert_eq!(message("title: ''\ndescription: []"), expected);
    }

    #[test]
    fn test_required_text_wrong_type() {
        let err = check_doc("title: 3\ndescription: []").unwrap_err();
        assert_eq!(err.to_string(), "Doc: requires title as string");
        assert_eq!(err.defect(), crate::schema::ErrorKind::WrongFieldType);
    }

    #[test]
    fn test_required_list() {
        assert_eq!(
            message("title: t\ndescription: nope"),
            "Doc: requires description as array"
        );
        assert_eq!(
            message("title: t\ndescription: [a, 1]"),
            "Doc: all description items must be strings"
        );
    }

    #[test]
    fn test_required_checked_before_optional() {
        // Both the optional `items` and the required `description` are wrong.
        assert_eq!(
            message("title: t\nitems: 5"),
            "Doc: requires description as array"
        );
    }

    #[test]
    fn test_optional_checked_before_nested() {
        let src = "title: t\ndescription: []\nitems: [{}]\ntags: 3";
        assert_eq!(message(src), "Doc: tags must be an object");
    }

    #[test]
    fn test_optional_null_is_absent() {
        check_doc("title: t\ndescription: []\nitems: ~\ntags: ~").expect("valid");
    }

    #[test]
    fn test_optional_wrong_types() {
        assert_eq!(
            message("title: t\ndescription: []\nitems: {a: 1}"),
            "Doc: items must be an array"
        );
        assert_eq!(
            message("title: t\ndescription: []\ntags: [a]"),
            "Doc: tags must be an object"
        );
        assert_eq!(
            message("title: t\ndescription: []\ntags: {[a]: [a]}"),
            "Doc: all tag names must be strings"
        );
    }

    #[test]
    fn test_nested_records() {
        let err = check_doc("title: t\ndescription: []\nitems: [{text: a}, {link: 2}]").unwrap_err();
        assert_eq!(err.to_string(), "Doc[1]: requires text as string");
        assert!(err.is_nested());

        assert_eq!(
            message("title: t\ndescription: []\nitems: [{text: a, link: 2}]"),
            "Doc[0]: link must be a string"
        );
    }

    #[test]
    fn test_text_groups() {
        assert_eq!(
            message("title: t\ndescription: []\ntags: {Lang: rust}"),
            "Doc[\"Lang\"]: must be an array"
        );
        assert_eq!(
            message("title: t\ndescription: []\ntags: {Lang: [rust, 5]}"),
            "Doc[\"Lang\"]: all items must be strings"
        );
    }

    #[test]
    fn test_record_groups() {
        assert_eq!(
            message("title: t\ndescription: []\nsections: {Header: [{text: a}, 3]}"),
            "Doc[\"Header\"][1]: must be an object"
        );
        assert_eq!(
            message("title: t\ndescription: []\nsections: {Header: ~}"),
            "Doc[\"Header\"]: must be an array"
        );
    }

    #[test]
    fn test_scalar_group_keys() {
        check_doc("title: t\ndescription: []\ntags: {2023: [a], true: [b], 1.5: [c]}")
            .expect("valid");

        assert_eq!(
            message("title: t\ndescription: []\nsections: {2023: [{link: x}]}"),
            "Doc[\"2023\"][0]: requires text as string"
        );
        assert_eq!(
            message("title: t\ndescription: []\ntags: {~: [a]}"),
            "Doc: all tag names must be strings"
        );
    }

    #[test]
    fn test_key_name() {
        assert_eq!(key_name(&Value::from("Header")).as_deref(), Some("Header"));
        assert_eq!(key_name(&Value::from(2023)).as_deref(), Some("2023"));
        assert_eq!(key_name(&Value::from(-4)).as_deref(), Some("-4"));
        assert_eq!(key_name(&Value::from(false)).as_deref(), Some("false"));
        assert_eq!(key_name(&Value::Null), None);
    }

    #[test]
    fn test_extra_keys_ignored() {
        check_doc("title: t\ndescription: []\nunknown: 42").expect("valid");
    }
}
