//! Settings state for the effect being configured
//!
//! Owns the selected effect, its current property values, the global
//! "apply without options" flag and the derived colors. Every mutating call
//! rebuilds the resolved options before returning, so readers always see the
//! selected effect and its options from the same edit.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, EffectSchema, PropertyType};
use crate::codegen;
use crate::constants::settings::DEFAULT_APPLY_WITHOUT_OPTIONS;
use crate::derived_color::{DerivedColors, COLOR_OPTION_KEY};
use crate::options::{coerce_number, OptionMap, PropertyValue};

pub struct SettingsManager<'c> {
    catalog: &'c Catalog,
    /// Borrowed straight from the catalog, never cloned
    selected: Option<&'c EffectSchema>,
    option_values: OptionMap,
    apply_without_options: bool,
    derived_colors: DerivedColors,
    /// Cached result of the last recompute
    resolved: Option<OptionMap>,
}

impl<'c> SettingsManager<'c> {
    /// Start with the first catalog effect selected and its defaults loaded.
    /// An empty catalog leaves nothing to select and is refused.
    pub fn new(catalog: &'c Catalog) -> Result<Self> {
        let first = catalog
            .first()
            .context("Effect catalog is empty, cannot select a default effect")?;

        let mut manager = Self {
            catalog,
            selected: Some(first),
            option_values: first.defaults(),
            apply_without_options: DEFAULT_APPLY_WITHOUT_OPTIONS,
            derived_colors: DerivedColors::default(),
            resolved: None,
        };
        manager.recompute();
        info!(effect = %first.name, "Initialized settings with first catalog effect");
        Ok(manager)
    }

    /// Select an effect by exact name and reset its values to the defaults.
    /// An unknown name clears the selection instead of failing.
    pub fn select_effect(&mut self, name: &str) {
        match self.catalog.find(name) {
            Some(schema) => {
                self.selected = Some(schema);
                self.option_values = schema.defaults();
                info!(effect = %name, "Selected effect");
            }
            None => {
                self.selected = None;
                self.option_values = OptionMap::new();
                warn!(effect = %name, "Effect not in catalog, selection cleared");
            }
        }
        self.recompute();
    }

    /// Store a property edit, coerced to the property's declared type.
    /// Ignored when nothing is selected or the name is not in the schema.
    pub fn set_property(&mut self, name: &str, raw: &str) {
        let Some(schema) = self.selected else {
            debug!(property = %name, "No effect selected, ignoring property edit");
            return;
        };
        let Some(definition) = schema.property(name) else {
            warn!(effect = %schema.name, property = %name, "Unknown property, ignoring edit");
            return;
        };

        let value = match &definition.kind {
            PropertyType::Number => {
                let number = coerce_number(raw);
                if number.is_nan() {
                    debug!(property = %name, raw = %raw, "Non-numeric input stored as NaN");
                }
                PropertyValue::Number(number)
            }
            PropertyType::String => PropertyValue::Text(raw.to_string()),
            PropertyType::Other(kind) => {
                debug!(property = %name, kind = %kind, "Property type is not editable, ignoring edit");
                return;
            }
        };

        debug!(effect = %schema.name, property = %name, value = %value, "Property updated");
        self.option_values.insert(name, value);
        self.recompute();
    }

    pub fn set_apply_without_options(&mut self, flag: bool) {
        self.apply_without_options = flag;
        info!(apply_without_options = flag, "Toggled apply without options");
        self.recompute();
    }

    /// Update the derived color of a color-bearing effect. Other names are ignored.
    /// Takes effect immediately when that effect is the selected one.
    pub fn set_derived_color(&mut self, effect: &str, color: impl Into<String>) {
        let color = color.into();
        if self.derived_colors.set(effect, color.clone()) {
            info!(effect = %effect, color = %color, "Derived color updated");
            self.recompute();
        } else {
            warn!(effect = %effect, "Effect has no derived color, ignoring");
        }
    }

    pub fn selected_effect(&self) -> Option<&'c EffectSchema> {
        self.selected
    }

    /// Options published to the preview and the code generator
    pub fn resolved_options(&self) -> Option<&OptionMap> {
        self.resolved.as_ref()
    }

    pub fn option_values(&self) -> &OptionMap {
        &self.option_values
    }

    pub fn apply_without_options(&self) -> bool {
        self.apply_without_options
    }

    pub fn derived_color(&self, effect: &str) -> Option<&str> {
        self.derived_colors.get(effect)
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Snippet for the current state, or `None` when no effect is selected
    pub fn code_snippet(&self) -> Option<String> {
        self.selected
            .map(|schema| codegen::generate(&schema.name, self.resolved.as_ref()))
    }

    fn recompute(&mut self) {
        self.resolved = match self.selected {
            Some(schema) if !self.apply_without_options => {
                let mut options = self.option_values.clone();
                if let Some(color) = self.derived_colors.get(&schema.name) {
                    options.insert(COLOR_OPTION_KEY, PropertyValue::Text(color.to_string()));
                }
                Some(options)
            }
            _ => None,
        };
    }
}
