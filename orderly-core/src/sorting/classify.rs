//! Classifier for sort arguments arriving as JSON.
//!
//! Scripting surfaces and config files cannot construct [`SortArg`] values
//! directly, so each JSON argument is mapped onto exactly one named variant:
//!
//! - a string is a path (`"-id"` sorts descending),
//! - an object with a `path` field is a [`PathConfig`],
//! - an object with a `get` field would be a getter config, which JSON cannot
//!   express, so it is unrecognised,
//! - any other object is [`CompareOptions`].
//!
//! The alternate field names `direction`, `defaultNumber` and `defaultString`
//! are accepted alongside `order` and `defaultValue`.

use super::args::{CompareOptions, PathConfig, SortArg};
use super::comparator::Comparator;
use crate::error::{Result, SortError};
use orderly_model::{Order, SortValue};
use serde::Deserialize;
use serde_json::Value as Json;
use tracing::warn;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PathConfigRepr {
    path: String,
    #[serde(default, alias = "direction")]
    order: Option<Order>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(flatten)]
    defaults: DefaultsRepr,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionsRepr {
    #[serde(default)]
    locale: Option<String>,
    #[serde(flatten)]
    defaults: DefaultsRepr,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefaultsRepr {
    #[serde(default)]
    default_value: Option<Json>,
    #[serde(default)]
    default_number: Option<f64>,
    #[serde(default)]
    default_string: Option<String>,
}

impl DefaultsRepr {
    fn into_values(self) -> Vec<SortValue> {
        let mut values = Vec::new();
        if let Some(value) = self.default_value.as_ref().and_then(json_operand) {
            values.push(value);
        }
        if let Some(number) = self.default_number {
            values.push(SortValue::Number(number));
        }
        if let Some(text) = self.default_string {
            values.push(SortValue::Text(text));
        }
        values
    }
}

fn json_operand(value: &Json) -> Option<SortValue> {
    match value {
        Json::Bool(b) => Some(SortValue::Bool(*b)),
        Json::Number(n) => n.as_f64().map(SortValue::Number),
        Json::String(s) => Some(SortValue::Text(s.clone())),
        Json::Null | Json::Array(_) | Json::Object(_) => None,
    }
}

impl<T> SortArg<T> {
    /// Map one JSON argument onto a sort argument variant.
    ///
    /// Returns `None` for shapes that are not sort arguments, including
    /// objects whose known fields have the wrong type.
    pub fn classify(value: &Json) -> Option<Self> {
        match value {
            Json::String(path) => Some(SortArg::Path(path.clone())),
            Json::Object(map) if map.contains_key("path") => {
                let repr = PathConfigRepr::deserialize(value).ok()?;
                Some(SortArg::PathConfig(PathConfig {
                    path: repr.path,
                    order: repr.order,
                    locale: repr.locale,
                    collator: None,
                    defaults: repr.defaults.into_values(),
                    transform: None,
                }))
            }
            Json::Object(map) if map.contains_key("get") => None,
            Json::Object(_) => {
                let repr = OptionsRepr::deserialize(value).ok()?;
                Some(SortArg::Options(CompareOptions {
                    locale: repr.locale,
                    collator: None,
                    defaults: repr.defaults.into_values(),
                }))
            }
            _ => None,
        }
    }
}

impl<T> Comparator<T> {
    /// Build from JSON arguments, dropping any that cannot be classified.
    pub fn from_json(args: &[Json]) -> Result<Self> {
        let classified = args.iter().enumerate().filter_map(|(position, arg)| {
            let classified = SortArg::classify(arg);
            if classified.is_none() {
                warn!(position, argument = %arg, "dropping unrecognized sort argument");
            }
            classified
        });

        Comparator::new(classified.collect::<Vec<_>>())
    }

    /// Build from JSON arguments, rejecting any that cannot be classified.
    pub fn from_json_strict(args: &[Json]) -> Result<Self> {
        let classified = args
            .iter()
            .map(|arg| {
                SortArg::classify(arg).ok_or_else(|| SortError::UnrecognizedArgument(arg.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Comparator::new(classified)
    }

    /// Build from a JSON array of arguments, e.g. `["-score", {"path": "name"}]`.
    pub fn from_json_str(spec: &str) -> Result<Self> {
        let args: Vec<Json> = serde_json::from_str(spec)?;
        Comparator::from_json(&args)
    }
}
