//! Application-wide constants
//!
//! String literals and fixed values shared by the core, the CLI and the GUI.

/// Generated snippet template pieces
pub mod codegen {
    /// Package the snippet imports from
    pub const PACKAGE: &str = "clickfusion";

    /// Component the snippet wraps the button in
    pub const COMPONENT: &str = "ClickFusion";

    /// Indentation of the component's attributes (and of every options JSON line)
    pub const ATTRIBUTE_INDENT: &str = "      ";
}

/// Settings state startup values
pub mod settings {
    /// Options are withheld from the preview until the user opts in
    pub const DEFAULT_APPLY_WITHOUT_OPTIONS: bool = true;
}

/// Text shown instead of the preview or the snippet when nothing is selected
pub mod placeholder {
    pub const PREVIEW: &str = "Preview content will appear here";
    pub const CODE: &str = "Code content will appear here";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding the max log level
    pub const LEVEL_ENV: &str = "LOG_LEVEL";

    pub const DEFAULT_LEVEL: &str = "info";
}
