//! Derived colors for the color-bearing effects
//!
//! A few effects take their `color` option from a control outside the property
//! form. Which effects, and what they start with, lives in [`DERIVED_COLOR_SLOTS`];
//! adding an effect here is all it takes to special-case it.

use std::collections::HashMap;

/// Option key overwritten with the derived color
pub const COLOR_OPTION_KEY: &str = "color";

#[derive(Debug)]
pub struct DerivedColorSlot {
    pub effect: &'static str,
    pub default: &'static str,
    /// Values offered by the color dropdown
    pub choices: &'static [&'static str],
}

pub const DERIVED_COLOR_SLOTS: &[DerivedColorSlot] = &[
    DerivedColorSlot {
        effect: "dragMode",
        default: "light",
        choices: &["light", "dark"],
    },
    DerivedColorSlot {
        effect: "codeMode",
        default: "dark",
        choices: &["light", "dark"],
    },
    DerivedColorSlot {
        effect: "confettiMode",
        default: "red",
        choices: &["red", "orange", "yellow", "green", "blue", "purple", "pink"],
    },
];

pub fn slot_for(effect: &str) -> Option<&'static DerivedColorSlot> {
    DERIVED_COLOR_SLOTS.iter().find(|slot| slot.effect == effect)
}

/// Current color per slot. Independent of effect selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedColors {
    values: HashMap<&'static str, String>,
}

impl Default for DerivedColors {
    fn default() -> Self {
        Self {
            values: DERIVED_COLOR_SLOTS
                .iter()
                .map(|slot| (slot.effect, slot.default.to_string()))
                .collect(),
        }
    }
}

impl DerivedColors {
    pub fn get(&self, effect: &str) -> Option<&str> {
        self.values.get(effect).map(String::as_str)
    }

    /// Store a color for a slotted effect. Returns false for any other effect.
    pub fn set(&mut self, effect: &str, color: String) -> bool {
        match slot_for(effect) {
            Some(slot) => {
                self.values.insert(slot.effect, color);
                true
            }
            None => false,
        }
    }
}
