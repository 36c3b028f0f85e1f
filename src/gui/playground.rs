//! Configurator window implemented with egui/eframe

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::info;

use super::components::code_view;
use super::components::effect_picker;
use super::components::preview::{ClickPreview, EffectRenderer};
use super::components::property_form::PropertyForm;
use super::constants::*;
use super::copy_feedback::CopyFeedback;
use crate::catalog::Catalog;
use crate::constants::placeholder;
use crate::settings::SettingsManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Preview,
    Code,
}

struct PlaygroundApp {
    settings: SettingsManager<'static>,
    form: PropertyForm,
    tab: Tab,
    copy_feedback: CopyFeedback,
    renderer: Box<dyn EffectRenderer>,
}

impl PlaygroundApp {
    fn new(_cc: &CreationContext<'_>, settings: SettingsManager<'static>) -> Self {
        info!("Initializing effect playground window");
        let form = PropertyForm::new(&settings);
        Self {
            settings,
            form,
            tab: Tab::Preview,
            copy_feedback: CopyFeedback::new(COPY_FEEDBACK_DURATION),
            renderer: Box::new(ClickPreview::new()),
        }
    }

    fn show_preview(&mut self, ui: &mut egui::Ui) {
        match self.settings.selected_effect() {
            Some(schema) => {
                self.renderer
                    .render(ui, &schema.name, self.settings.resolved_options());
            }
            None => show_placeholder(ui, placeholder::PREVIEW),
        }
    }

    fn show_code(&mut self, ui: &mut egui::Ui) {
        match self.settings.code_snippet() {
            Some(code) => {
                code_view::ui(ui, &code, &mut self.copy_feedback);
            }
            None => show_placeholder(ui, placeholder::CODE),
        }
    }
}

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("settings_panel")
            .exact_width(SETTINGS_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(PADDING);
                if effect_picker::ui(ui, &mut self.settings) {
                    self.form.reset(&self.settings);
                }

                ui.add_space(SECTION_SPACING);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.form.ui(ui, &mut self.settings);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Preview, "Preview");
                ui.selectable_value(&mut self.tab, Tab::Code, "Code");
            });
            ui.separator();

            match self.tab {
                Tab::Preview => self.show_preview(ui),
                Tab::Code => self.show_code(ui),
            }
        });
    }
}

fn show_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(egui::RichText::new(text).weak());
    });
}

/// Open the configurator window. Fails before any window opens when the
/// catalog has no effect to select.
pub fn run_gui(catalog: &'static Catalog) -> Result<()> {
    let settings = SettingsManager::new(catalog)?;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Effect Playground"),
        ..Default::default()
    };

    eframe::run_native(
        "Effect Playground",
        options,
        Box::new(move |cc| Ok(Box::new(PlaygroundApp::new(cc, settings)))),
    )
    .map_err(|err| anyhow!("Failed to launch effect playground: {err}"))
}
