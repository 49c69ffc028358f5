//! Ordered name → sequence mappings.

use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

/// A YAML mapping from group names to sequences, in file order.
///
/// About sections and skill categories are rendered in the order they are
/// written, so this keeps the order instead of sorting keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups<T>(Vec<(String, Vec<T>)>);

impl<T> Groups<T> {
    /// Iterate over `(name, items)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.0
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Group names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    /// Items of the group called `name`.
    pub fn get(&self, name: &str) -> Option<&[T]> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, items)| items.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Serialize> Serialize for Groups<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, items) in &self.0 {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Groups<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupsVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for GroupsVisitor<T> {
            type Value = Groups<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping from names to sequences")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, items)) = access.next_entry::<GroupName, Vec<T>>()? {
                    groups.push((name.0, items));
                }
                Ok(Groups(groups))
            }
        }

        deserializer.deserialize_map(GroupsVisitor(PhantomData))
    }
}

/// A group key read as a string. YAML keys such as `2023` or `true` are
/// scalars of another type but still name a group.
struct GroupName(String);

impl<'de> Deserialize<'de> for GroupName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl Visitor<'_> for NameVisitor {
            type Value = GroupName;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number, or boolean group name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<GroupName, E> {
                Ok(GroupName(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<GroupName, E> {
                Ok(GroupName(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<GroupName, E> {
                Ok(GroupName(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<GroupName, E> {
                Ok(GroupName(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<GroupName, E> {
                Ok(GroupName(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<GroupName, E> {
                Ok(GroupName(v.to_string()))
            }
        }

        deserializer.deserialize_any(NameVisitor)
    }
}
