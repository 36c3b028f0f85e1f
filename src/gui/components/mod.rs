//! Panels and widgets composing the configurator window

pub mod code_view;
pub mod effect_picker;
pub mod preview;
pub mod property_form;
