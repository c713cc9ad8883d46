//! YAML provider support backed by `serde-saphyr`.

use std::collections::BTreeMap;
use std::fmt;

use figment::{
    Metadata, Profile, Provider, Source,
    error::Kind,
    value::{Dict, Value as FigmentValue},
};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Number, Value as JsonValue};
use serde_saphyr::Options;

use crate::{ConfigMap, ResourceLocation};

/// A decoded YAML node.
///
/// Every node is requested as an optional value so that plain null forms
/// (`~`, `null`, an empty value) decode as [`JsonValue::Null`]. Untyped
/// decoding would otherwise hand them over as strings.
struct YamlNode(JsonValue);

impl<'de> Deserialize<'de> for YamlNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(NodeVisitor).map(Self)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = JsonValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a YAML value")
    }

    fn visit_none<E: de::Error>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<JsonValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<JsonValue, E> {
        Ok(JsonValue::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<JsonValue, E> {
        Ok(JsonValue::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<JsonValue, E> {
        Ok(JsonValue::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<JsonValue, E> {
        Number::from_f64(value)
            .map(JsonValue::Number)
            .ok_or_else(|| E::custom(format!("non-finite number {value}")))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<JsonValue, E> {
        Ok(JsonValue::String(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<JsonValue, E> {
        Ok(JsonValue::String(value))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<JsonValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(YamlNode(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<JsonValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = ConfigMap::new();
        while let Some((key, YamlNode(value))) = map.next_entry::<String, YamlNode>()? {
            entries.insert(key, value);
        }
        Ok(JsonValue::Object(entries))
    }
}

/// Figment provider that decodes in-memory YAML using `serde-saphyr`.
///
/// Booleans follow YAML 1.2, so `yes` and `on` stay strings. Null scalars
/// decode as nulls, and a document that decodes to null yields an empty
/// mapping.
#[derive(Debug, Clone)]
pub struct SaphyrYaml {
    location: ResourceLocation,
    contents: String,
}

impl SaphyrYaml {
    /// Construct a provider over `contents` fetched from `location`.
    #[must_use]
    pub fn string<S: Into<String>>(location: ResourceLocation, contents: S) -> Self {
        Self {
            location,
            contents: contents.into(),
        }
    }

    /// Parse YAML contents using strict boolean semantics.
    fn parse_value(contents: &str) -> Result<JsonValue, serde_saphyr::Error> {
        serde_saphyr::from_str_with_options::<YamlNode>(
            contents,
            Options {
                strict_booleans: true,
                ..Options::default()
            },
        )
        .map(|YamlNode(value)| value)
    }
}

impl Provider for SaphyrYaml {
    fn metadata(&self) -> Metadata {
        Metadata::from("Saphyr YAML", Source::Custom(self.location.to_string()))
    }

    fn data(&self) -> Result<BTreeMap<Profile, Dict>, figment::Error> {
        let parsed = Self::parse_value(&self.contents).map_err(|err| {
            figment::Error::from(Kind::Message(format!(
                "failed to parse {}: {err}",
                self.location
            )))
        })?;
        let dict = match FigmentValue::serialize(parsed)? {
            FigmentValue::Empty(..) => Dict::new(),
            value => {
                let actual = value.to_actual();
                value
                    .into_dict()
                    .ok_or_else(|| figment::Error::from(Kind::InvalidType(actual, "map".into())))?
            }
        };
        Ok(Profile::Default.collect(dict))
    }
}
