//! egui front end for the effect playground

mod components;
mod constants;
mod copy_feedback;
mod playground;

pub use playground::run_gui;
