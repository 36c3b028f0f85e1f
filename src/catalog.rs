//! Effect catalog
//!
//! Static, read-only collection of effect schemas loaded once at startup.
//! The document shape is `{ "effects": [ { name, properties: [ { name, type, optional, default, note? } ] } ] }`.
//! Any malformed entry fails the whole load; nothing is mutated afterwards.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::options::{OptionMap, PropertyValue};

/// Catalog compiled into the binary, used unless `--catalog` points elsewhere
pub const EMBEDDED_CATALOG: &str = include_str!("../assets/effects.json");

/// Declared type of a property.
/// Types other than `number` and `string` load fine but get no input and accept no edits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PropertyType {
    Number,
    String,
    Other(String),
}

impl From<String> for PropertyType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "number" => PropertyType::Number,
            "string" => PropertyType::String,
            _ => PropertyType::Other(name),
        }
    }
}

impl PropertyType {
    pub fn label(&self) -> &str {
        match self {
            PropertyType::Number => "number",
            PropertyType::String => "string",
            PropertyType::Other(name) => name,
        }
    }

    /// Whether the form renders an input for this type
    pub fn is_editable(&self) -> bool {
        !matches!(self, PropertyType::Other(_))
    }
}

/// One typed, named, defaulted field of an effect
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub name: String,
    pub kind: PropertyType,
    pub optional: bool,
    pub default: PropertyValue,
    pub note: Option<String>,
}

/// Name plus ordered property definitions
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSchema {
    pub name: String,
    pub properties: Vec<PropertyDefinition>,
}

impl EffectSchema {
    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Fresh option mapping holding every property's default, in schema order
    pub fn defaults(&self) -> OptionMap {
        self.properties
            .iter()
            .map(|p| (p.name.clone(), p.default.clone()))
            .collect()
    }

    /// Notes attached to properties, in schema order
    pub fn notes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .filter_map(|p| p.note.as_deref().map(|note| (p.name.as_str(), note)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    effects: Vec<EffectSchema>,
}

// Wire shapes, validated into the typed schema above
#[derive(Deserialize)]
struct RawCatalog {
    effects: Vec<RawEffect>,
}

#[derive(Deserialize)]
struct RawEffect {
    name: Option<String>,
    #[serde(default)]
    properties: Vec<RawProperty>,
}

#[derive(Deserialize)]
struct RawProperty {
    name: String,
    #[serde(rename = "type")]
    kind: PropertyType,
    #[serde(default)]
    optional: bool,
    default: Option<Value>,
    #[serde(default)]
    note: Option<String>,
}

impl Catalog {
    /// Load the catalog bundled with the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("Embedded effect catalog is malformed")
    }

    /// Load a catalog document from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read effect catalog from {:?}", path))?;
        Self::from_json(&contents)
            .with_context(|| format!("Effect catalog {:?} is malformed", path))
    }

    /// Parse and validate a catalog document
    pub fn from_json(contents: &str) -> Result<Self> {
        let raw: RawCatalog =
            serde_json::from_str(contents).context("Failed to parse effect catalog JSON")?;

        let mut seen_effects = HashSet::new();
        let mut effects = Vec::with_capacity(raw.effects.len());

        for (idx, raw_effect) in raw.effects.into_iter().enumerate() {
            let name = match raw_effect.name {
                Some(name) if !name.trim().is_empty() => name,
                _ => bail!("effect #{idx} has no name"),
            };
            if !seen_effects.insert(name.clone()) {
                bail!("duplicate effect name '{name}'");
            }

            let properties = validate_properties(&name, raw_effect.properties)?;
            debug!(effect = %name, properties = properties.len(), "Loaded effect schema");
            effects.push(EffectSchema { name, properties });
        }

        info!("Loaded effect catalog with {} effect(s)", effects.len());
        Ok(Self { effects })
    }

    pub fn effects(&self) -> &[EffectSchema] {
        &self.effects
    }

    /// Case-sensitive exact lookup
    pub fn find(&self, name: &str) -> Option<&EffectSchema> {
        self.effects.iter().find(|e| e.name == name)
    }

    pub fn first(&self) -> Option<&EffectSchema> {
        self.effects.first()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

fn validate_properties(effect: &str, raw: Vec<RawProperty>) -> Result<Vec<PropertyDefinition>> {
    let mut seen = HashSet::new();
    let mut properties = Vec::with_capacity(raw.len());

    for prop in raw {
        if !seen.insert(prop.name.clone()) {
            bail!("effect '{effect}' declares property '{}' more than once", prop.name);
        }

        let default = match (&prop.kind, prop.default) {
            (PropertyType::Number, Some(Value::Number(n))) => match n.as_f64() {
                Some(n) => PropertyValue::Number(n),
                None => bail!("effect '{effect}': default of '{}' is not a finite number", prop.name),
            },
            (PropertyType::String, Some(Value::String(s))) => PropertyValue::Text(s),
            (PropertyType::Other(_), Some(value)) => PropertyValue::Other(value),
            (kind, Some(other)) => bail!(
                "effect '{effect}': default {} of '{}' does not match declared type {}",
                other,
                prop.name,
                kind.label()
            ),
            (_, None) => bail!("effect '{effect}': property '{}' has no default", prop.name),
        };

        properties.push(PropertyDefinition {
            name: prop.name,
            kind: prop.kind,
            optional: prop.optional,
            default,
            note: prop.note,
        });
    }

    Ok(properties)
}
