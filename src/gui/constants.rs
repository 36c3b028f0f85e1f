//! GUI-specific constants for layout, colors and timings

use std::time::Duration;

use egui;

/// Window dimensions
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const WINDOW_MIN_WIDTH: f32 = 900.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Settings side panel width
pub const SETTINGS_PANEL_WIDTH: f32 = 340.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const PADDING: f32 = 10.0;

/// How long the "Copied!" indicator stays up
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Width of the line number gutter in the code view
pub const LINE_NUMBER_WIDTH: usize = 3;

/// Colors
pub const COPY_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
pub const NOTE_TEXT: egui::Color32 = egui::Color32::GRAY;

/// Click preview particle burst
pub const BURST_LIFETIME: Duration = Duration::from_millis(800);
pub const BURST_DISTANCE: f32 = 90.0;
pub const BURST_PARTICLE_RADIUS: f32 = 4.0;
pub const BURST_DEFAULT_PARTICLES: usize = 12;
pub const BURST_MAX_PARTICLES: usize = 100;
