//! Logging categories and the enable/disable configuration value

use serde::de::{IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A category tag that can appear in a [`LoggerOptions`] list.
///
/// Tags cover seven of the nine sink slots; the slow-query and base error
/// slots have no tag and cannot be toggled (see [`LoggerOptions`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Query,
    Schema,
    Error,
    Warn,
    Info,
    Log,
    Migration,
}

impl LogCategory {
    /// Every recognized tag, in declaration order.
    pub const ALL: [LogCategory; 7] = [
        LogCategory::Query,
        LogCategory::Schema,
        LogCategory::Error,
        LogCategory::Warn,
        LogCategory::Info,
        LogCategory::Log,
        LogCategory::Migration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Query => "query",
            LogCategory::Schema => "schema",
            LogCategory::Error => "error",
            LogCategory::Warn => "warn",
            LogCategory::Info => "info",
            LogCategory::Log => "log",
            LogCategory::Migration => "migration",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(LogCategory::Query),
            "schema" => Ok(LogCategory::Schema),
            "error" => Ok(LogCategory::Error),
            "warn" => Ok(LogCategory::Warn),
            "info" => Ok(LogCategory::Info),
            "log" => Ok(LogCategory::Log),
            "migration" => Ok(LogCategory::Migration),
            _ => Err(format!("Invalid log category: '{}'", s)),
        }
    }
}

/// Which logging events an adaptor forwards to its sinks.
///
/// Interpreted exactly once, at adaptor construction. The original
/// configuration shapes are a boolean, the string `"all"`, or a list of
/// [`LogCategory`] tags; any other value means nothing is enabled. Slots
/// without a tag (slow-query, base error) stay live regardless of the
/// value here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoggerOptions {
    /// Every category enabled (`true` / `"all"`).
    All,
    /// Nothing enabled (`false`, or an unrecognized configuration value).
    #[default]
    Disabled,
    /// Exactly the listed categories enabled.
    Categories(Vec<LogCategory>),
}

impl LoggerOptions {
    /// Whether `category`'s sink slot keeps its real callback.
    pub fn enables(&self, category: LogCategory) -> bool {
        match self {
            LoggerOptions::All => true,
            LoggerOptions::Disabled => false,
            LoggerOptions::Categories(list) => list.contains(&category),
        }
    }
}

impl From<bool> for LoggerOptions {
    fn from(enabled: bool) -> Self {
        if enabled {
            LoggerOptions::All
        } else {
            LoggerOptions::Disabled
        }
    }
}

impl From<Vec<LogCategory>> for LoggerOptions {
    fn from(categories: Vec<LogCategory>) -> Self {
        LoggerOptions::Categories(categories)
    }
}

impl<const N: usize> From<[LogCategory; N]> for LoggerOptions {
    fn from(categories: [LogCategory; N]) -> Self {
        LoggerOptions::Categories(categories.to_vec())
    }
}

impl FromIterator<LogCategory> for LoggerOptions {
    fn from_iter<I: IntoIterator<Item = LogCategory>>(iter: I) -> Self {
        LoggerOptions::Categories(iter.into_iter().collect())
    }
}

impl Serialize for LoggerOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LoggerOptions::All => serializer.serialize_str("all"),
            LoggerOptions::Disabled => serializer.serialize_bool(false),
            LoggerOptions::Categories(list) => list.serialize(serializer),
        }
    }
}

/// List elements that are not recognized tags are ignored rather than
/// rejected, matching the original's per-tag membership checks.
#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeCategory {
    Known(LogCategory),
    Unknown(IgnoredAny),
}

struct OptionsVisitor;

impl<'de> Visitor<'de> for OptionsVisitor {
    type Value = LoggerOptions;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, the string \"all\", or a list of category names")
    }

    fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<Self::Value, E> {
        Ok(LoggerOptions::from(value))
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value == "all" {
            Ok(LoggerOptions::All)
        } else {
            Ok(LoggerOptions::Disabled)
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut categories = Vec::new();
        while let Some(element) = seq.next_element::<MaybeCategory>()? {
            if let MaybeCategory::Known(category) = element {
                categories.push(category);
            }
        }
        Ok(LoggerOptions::Categories(categories))
    }

    fn visit_i64<E: serde::de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(LoggerOptions::Disabled)
    }

    fn visit_u64<E: serde::de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(LoggerOptions::Disabled)
    }

    fn visit_f64<E: serde::de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(LoggerOptions::Disabled)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(LoggerOptions::Disabled)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(LoggerOptions::Disabled)
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(LoggerOptions::Disabled)
    }
}

impl<'de> Deserialize<'de> for LoggerOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(OptionsVisitor)
    }
}
