//! Effect dropdown and the global "apply without options" toggle

use eframe::egui;

use crate::gui::constants::ITEM_SPACING;
use crate::settings::SettingsManager;

/// Renders the picker and returns true when an effect was (re)selected
pub fn ui(ui: &mut egui::Ui, settings: &mut SettingsManager<'_>) -> bool {
    let mut reselected = false;
    let catalog = settings.catalog();
    let current = settings.selected_effect().map(|e| e.name.as_str());

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Choose Effect:").strong());

            let mut picked = None;
            egui::ComboBox::from_id_salt("effect_picker")
                .selected_text(current.unwrap_or("None"))
                .width(180.0)
                .show_ui(ui, |ui| {
                    for effect in catalog.effects() {
                        if ui
                            .selectable_label(current == Some(effect.name.as_str()), &effect.name)
                            .clicked()
                        {
                            picked = Some(effect.name.as_str());
                        }
                    }
                });

            if let Some(name) = picked {
                settings.select_effect(name);
                reselected = true;
            }
        });

        ui.add_space(ITEM_SPACING);

        let mut withhold = settings.apply_without_options();
        if ui
            .checkbox(&mut withhold, "Apply without particle options")
            .changed()
        {
            settings.set_apply_without_options(withhold);
        }
    });

    reselected
}
