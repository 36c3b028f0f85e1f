//! Live effect preview
//!
//! The preview only ever sees the effect name and the resolved options.
//! [`ClickPreview`] is a stand-in renderer: a button that throws a short
//! particle burst, tinted by the `color` option when it names a color.

use std::f32::consts::TAU;
use std::time::Instant;

use eframe::egui;

use crate::derived_color::COLOR_OPTION_KEY;
use crate::gui::constants::{
    BURST_DEFAULT_PARTICLES, BURST_DISTANCE, BURST_LIFETIME, BURST_MAX_PARTICLES,
    BURST_PARTICLE_RADIUS,
};
use crate::options::OptionMap;

/// Option key read for the number of particles per burst
const PARTICLE_COUNT_KEY: &str = "particleCount";

pub trait EffectRenderer {
    fn render(&mut self, ui: &mut egui::Ui, effect: &str, options: Option<&OptionMap>);
}

struct Burst {
    origin: egui::Pos2,
    started: Instant,
    color: egui::Color32,
    particles: usize,
}

#[derive(Default)]
pub struct ClickPreview {
    /// Effect the running bursts belong to; switching effects drops them
    effect: Option<String>,
    bursts: Vec<Burst>,
}

impl ClickPreview {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EffectRenderer for ClickPreview {
    fn render(&mut self, ui: &mut egui::Ui, effect: &str, options: Option<&OptionMap>) {
        if self.effect.as_deref() != Some(effect) {
            self.effect = Some(effect.to_string());
            self.bursts.clear();
        }

        let now = Instant::now();
        self.bursts
            .retain(|burst| now.duration_since(burst.started) < BURST_LIFETIME);

        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() / 2.0 - 20.0).max(0.0));
            let response = ui.button(format!("Click Me for {effect} Effect!"));
            if response.clicked() {
                self.bursts.push(Burst {
                    origin: response.rect.center(),
                    started: now,
                    color: burst_color(options),
                    particles: burst_particles(options),
                });
            }
        });

        let painter = ui.painter();
        for burst in &self.bursts {
            let t = now.duration_since(burst.started).as_secs_f32() / BURST_LIFETIME.as_secs_f32();
            let color = burst.color.gamma_multiply(1.0 - t);
            for i in 0..burst.particles {
                let angle = i as f32 / burst.particles as f32 * TAU;
                let offset = egui::vec2(angle.cos(), angle.sin()) * BURST_DISTANCE * t;
                painter.circle_filled(burst.origin + offset, BURST_PARTICLE_RADIUS, color);
            }
        }

        if !self.bursts.is_empty() {
            ui.ctx().request_repaint();
        }
    }
}

/// Particle tint from the `color` option: a color name or `#rrggbb`
fn burst_color(options: Option<&OptionMap>) -> egui::Color32 {
    options
        .and_then(|o| o.get(COLOR_OPTION_KEY))
        .and_then(|v| v.as_text())
        .and_then(|name| named_color(name).or_else(|| egui::Color32::from_hex(name).ok()))
        .unwrap_or(egui::Color32::LIGHT_BLUE)
}

fn named_color(name: &str) -> Option<egui::Color32> {
    let color = match name {
        "light" => egui::Color32::from_gray(230),
        "dark" => egui::Color32::from_gray(40),
        "red" => egui::Color32::RED,
        "orange" => egui::Color32::ORANGE,
        "yellow" => egui::Color32::YELLOW,
        "green" => egui::Color32::GREEN,
        "blue" => egui::Color32::BLUE,
        "purple" => egui::Color32::from_rgb(160, 32, 240),
        "pink" => egui::Color32::from_rgb(255, 105, 180),
        _ => return None,
    };
    Some(color)
}

fn burst_particles(options: Option<&OptionMap>) -> usize {
    options
        .and_then(|o| o.get(PARTICLE_COUNT_KEY))
        .and_then(|v| v.as_number())
        .filter(|n| n.is_finite() && *n >= 1.0)
        .map(|n| (n as usize).min(BURST_MAX_PARTICLES))
        .unwrap_or(BURST_DEFAULT_PARTICLES)
}
