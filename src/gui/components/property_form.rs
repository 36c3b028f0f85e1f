//! Schema-driven property form
//!
//! One text input per property of the selected effect. Edits are pushed into
//! the settings manager as raw text; coercion happens there, so whatever the
//! user typed stays visible in the input even when it is not a valid number.

use eframe::egui;

use crate::catalog::PropertyType;
use crate::derived_color::slot_for;
use crate::gui::constants::{ITEM_SPACING, NOTE_TEXT, SECTION_SPACING};
use crate::settings::SettingsManager;

pub struct PropertyForm {
    /// Raw input text per property, in schema order
    buffers: Vec<(String, String)>,
}

impl PropertyForm {
    pub fn new(settings: &SettingsManager<'_>) -> Self {
        let mut form = Self { buffers: Vec::new() };
        form.reset(settings);
        form
    }

    /// Reload the inputs from the current option values (after a selection).
    /// Properties of a type the form cannot edit get no input.
    pub fn reset(&mut self, settings: &SettingsManager<'_>) {
        let editable = |name: &str| {
            settings
                .selected_effect()
                .and_then(|schema| schema.property(name))
                .is_some_and(|prop| prop.kind.is_editable())
        };
        self.buffers = settings
            .option_values()
            .iter()
            .filter(|(name, _)| editable(name))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
    }

    fn buffer_mut(&mut self, name: &str) -> Option<&mut String> {
        self.buffers
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, text)| text)
    }

    /// Renders the form and returns true if any value was edited
    pub fn ui(&mut self, ui: &mut egui::Ui, settings: &mut SettingsManager<'_>) -> bool {
        let Some(schema) = settings.selected_effect() else {
            return false;
        };
        let mut edits = Vec::new();

        ui.label(
            egui::RichText::new(format!("{} Settings", schema.name))
                .heading()
                .strong(),
        );
        ui.add_space(ITEM_SPACING);

        if let Some(slot) = slot_for(&schema.name) {
            let current = settings.derived_color(slot.effect).unwrap_or(slot.default).to_string();
            let mut picked = None;
            ui.horizontal(|ui| {
                ui.label("color:");
                egui::ComboBox::from_id_salt(("derived_color", slot.effect))
                    .selected_text(&current)
                    .show_ui(ui, |ui| {
                        for choice in slot.choices {
                            if ui.selectable_label(current == *choice, *choice).clicked() {
                                picked = Some(*choice);
                            }
                        }
                    });
            });
            if let Some(color) = picked {
                settings.set_derived_color(slot.effect, color);
            }
            ui.add_space(ITEM_SPACING);
        }

        for prop in &schema.properties {
            let Some(buffer) = self.buffer_mut(&prop.name) else {
                continue;
            };

            ui.label(&prop.name);
            let input = match &prop.kind {
                PropertyType::Number => egui::TextEdit::singleline(buffer).hint_text("number"),
                PropertyType::String => egui::TextEdit::singleline(buffer),
                PropertyType::Other(_) => continue,
            };
            if ui.add(input.desired_width(f32::INFINITY)).changed() {
                edits.push((prop.name.as_str(), buffer.clone()));
            }
            ui.add_space(ITEM_SPACING);
        }

        let notes: Vec<_> = schema.notes().collect();
        if !notes.is_empty() {
            ui.add_space(SECTION_SPACING);
            for (_, note) in notes {
                ui.label(egui::RichText::new(note).italics().small().color(NOTE_TEXT));
            }
        }

        let changed = !edits.is_empty();
        for (name, raw) in edits {
            settings.set_property(name, &raw);
        }
        changed
    }

    #[cfg(test)]
    fn text(&self, name: &str) -> Option<&str> {
        self.buffers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, text)| text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::catalog::tests::test_catalog;

    #[test]
    fn test_form_starts_from_defaults() {
        let catalog = test_catalog();
        let settings = SettingsManager::new(&catalog).unwrap();
        let form = PropertyForm::new(&settings);

        assert_eq!(form.text("rippleCount"), Some("3"));
        assert_eq!(form.text("rippleColor"), Some("#60a5fa"));
    }

    #[test]
    fn test_reset_follows_selection() {
        let catalog = test_catalog();
        let mut settings = SettingsManager::new(&catalog).unwrap();
        let mut form = PropertyForm::new(&settings);

        settings.select_effect("confettiMode");
        form.reset(&settings);
        assert_eq!(form.text("rippleCount"), None);
        assert_eq!(form.text("particleCount"), Some("50"));
        assert_eq!(form.text("gravity"), Some("0.5"));
    }

    #[test]
    fn test_reset_empty_without_selection() {
        let catalog = test_catalog();
        let mut settings = SettingsManager::new(&catalog).unwrap();
        let mut form = PropertyForm::new(&settings);

        settings.select_effect("unknownMode");
        form.reset(&settings);
        assert!(form.buffers.is_empty());
    }

    #[test]
    fn test_form_skips_unknown_property_type() {
        let catalog = Catalog::from_json(
            r#"{ "effects": [ { "name": "toggleMode", "properties": [
                { "name": "speed", "type": "number", "default": 2 },
                { "name": "on", "type": "boolean", "default": true }
            ] } ] }"#,
        )
        .unwrap();
        let settings = SettingsManager::new(&catalog).unwrap();
        let form = PropertyForm::new(&settings);

        assert_eq!(form.text("speed"), Some("2"));
        assert_eq!(form.text("on"), None);
        assert!(settings.option_values().contains_key("on"));
    }
}
