//! Generated snippet with line numbers and a copy button

use std::time::Instant;

use eframe::egui;
use tracing::info;

use crate::gui::constants::{COPY_SUCCESS, ITEM_SPACING, LINE_NUMBER_WIDTH};
use crate::gui::copy_feedback::CopyFeedback;

/// Renders the snippet and returns true when it was copied this frame
pub fn ui(ui: &mut egui::Ui, code: &str, feedback: &mut CopyFeedback) -> bool {
    let now = Instant::now();
    let mut copied = false;

    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if feedback.is_showing(now) {
                ui.colored_label(COPY_SUCCESS, "\u{2714} Copied!");
            } else if ui.button("\u{1F4CB} Copy").clicked() {
                ui.ctx().copy_text(code.to_string());
                feedback.trigger(now);
                copied = true;
                info!(bytes = code.len(), "Copied snippet to clipboard");
            }
        });
    });

    ui.add_space(ITEM_SPACING);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (number, line) in numbered_lines(code) {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(number).monospace().weak());
                    ui.label(egui::RichText::new(line).monospace());
                });
            }
        });

    if let Some(left) = feedback.remaining(now) {
        ui.ctx().request_repaint_after(left);
    }

    copied
}

/// Lines paired with their right-aligned 1-based number
pub fn numbered_lines(code: &str) -> impl Iterator<Item = (String, &str)> {
    code.split('\n')
        .enumerate()
        .map(|(idx, line)| (format!("{:>width$}", idx + 1, width = LINE_NUMBER_WIDTH), line))
}
