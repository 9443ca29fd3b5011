use ratatui::style::Color;

/// Color palette for the bridge TUI
#[derive(Debug, Clone)]
pub struct ModernTheme {
    // Primary colors
    pub primary: Color,
    pub accent: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    // Interactive colors
    pub selected: Color,
    pub border: Color,
    #[allow(dead_code)]
    pub border_focused: Color,
}

impl Default for ModernTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ModernTheme {
    /// Dark theme with vibrant accents
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(99, 102, 241),  // Indigo-500
            accent: Color::Rgb(168, 85, 247),   // Purple-500

            success: Color::Rgb(34, 197, 94),  // Green-500
            warning: Color::Rgb(251, 191, 36), // Amber-500
            danger: Color::Rgb(239, 68, 68),   // Red-500
            info: Color::Rgb(59, 130, 246),    // Blue-500

            text_primary: Color::Rgb(243, 244, 246),   // Gray-100
            text_secondary: Color::Rgb(156, 163, 175), // Gray-400
            text_disabled: Color::Rgb(107, 114, 128),  // Gray-500

            selected: Color::Rgb(99, 102, 241),       // Indigo-500
            border: Color::Rgb(75, 85, 99),           // Gray-600
            border_focused: Color::Rgb(99, 102, 241), // Indigo-500
        }
    }

    /// Light theme variant
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(99, 102, 241),
            accent: Color::Rgb(168, 85, 247),

            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(251, 191, 36),
            danger: Color::Rgb(239, 68, 68),
            info: Color::Rgb(59, 130, 246),

            text_primary: Color::Rgb(17, 24, 39),
            text_secondary: Color::Rgb(107, 114, 128),
            text_disabled: Color::Rgb(156, 163, 175),

            selected: Color::Rgb(99, 102, 241),
            border: Color::Rgb(209, 213, 219),
            border_focused: Color::Rgb(99, 102, 241),
        }
    }
}

/// Icon set used across the UI
pub struct ModernIcons;

impl ModernIcons {
    // Candidate selection state
    pub const CHECKED: &'static str = "[x]";
    pub const UNCHECKED: &'static str = "[ ]";

    // Status icons
    pub const SUCCESS: &'static str = "✓";
    pub const FAILURE: &'static str = "✗";
    pub const INFO: &'static str = "ℹ";
    pub const WARNING: &'static str = "▲";
    #[allow(dead_code)]
    pub const REFRESH: &'static str = "⟳";
    pub const SEND: &'static str = "➤";
    #[allow(dead_code)]
    pub const BULLET: &'static str = "•";
}
