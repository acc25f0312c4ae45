//! Theme colors for the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_card: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub link: &'static str,
    pub disputed: &'static str,
    pub button_gradient: &'static str,
    pub input_bg: &'static str,
}

/// Stone-dark palette used throughout the board
pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#292524",
    bg_card: "#44403c",
    text_primary: "#fafaf9",
    text_muted: "#a8a29e",
    link: "#a8a29e",
    disputed: "#ef4444",
    button_gradient: "linear-gradient(135deg, #3b82f6, #ef4444, #16a34a, #eab308)",
    input_bg: "#78716c",
};

/// Shared font stack for headings and buttons
pub const DISPLAY_FONT: &str = "'Coiny', 'Sono', system-ui, sans-serif";
