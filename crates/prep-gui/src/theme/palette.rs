//! Base palette and the studio color extension trait.

use iced::theme::Palette;
use iced::{Color, Theme};

/// The base palette Iced expands into its `ExtendedPalette`.
///
/// A calm light scheme: near-white background, slate text, indigo accent.
pub fn studio_palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.98, 0.99),
        text: Color::from_rgb(0.12, 0.13, 0.18),
        primary: Color::from_rgb(0.31, 0.34, 0.78),
        success: Color::from_rgb(0.20, 0.65, 0.40),
        warning: Color::from_rgb(0.92, 0.65, 0.10),
        danger: Color::from_rgb(0.83, 0.27, 0.27),
    }
}

/// App-specific colors not covered by Iced's `ExtendedPalette`.
#[derive(Debug, Clone, Copy)]
pub struct StudioColorSet {
    // === Text ===
    /// Secondary text (labels, inactive items)
    pub text_secondary: Color,
    /// Muted text (hints, footer, placeholders)
    pub text_muted: Color,
    /// Text on accent backgrounds
    pub text_on_accent: Color,

    // === Borders ===
    /// Default border
    pub border_default: Color,
    /// Subtle border (chips, cards)
    pub border_subtle: Color,
    /// Focused element border
    pub border_focused: Color,

    // === Backgrounds ===
    /// Secondary background (sidebar, tab strip)
    pub background_secondary: Color,
    /// Elevated surface (inputs, content panel)
    pub background_elevated: Color,

    // === Interactive ===
    /// Accent hover
    pub accent_hover: Color,
    /// Accent pressed
    pub accent_pressed: Color,
    /// Light accent tint (active item backgrounds)
    pub accent_light: Color,
    /// Medium accent tint (selections)
    pub accent_medium: Color,
}

/// Extension trait giving style closures access to the studio colors.
pub trait StudioColors {
    fn studio(&self) -> StudioColorSet;
}

impl StudioColors for Theme {
    fn studio(&self) -> StudioColorSet {
        let palette = self.extended_palette();
        let accent = palette.primary.base.color;

        StudioColorSet {
            text_secondary: Color::from_rgb(0.32, 0.34, 0.40),
            text_muted: Color::from_rgb(0.52, 0.54, 0.60),
            text_on_accent: Color::WHITE,

            border_default: Color::from_rgb(0.84, 0.85, 0.88),
            border_subtle: Color::from_rgb(0.90, 0.91, 0.93),
            border_focused: accent,

            background_secondary: Color::from_rgb(0.95, 0.95, 0.97),
            background_elevated: Color::WHITE,

            accent_hover: blend(accent, Color::BLACK, 0.10),
            accent_pressed: blend(accent, Color::BLACK, 0.20),
            accent_light: Color { a: 0.12, ..accent },
            accent_medium: Color { a: 0.25, ..accent },
        }
    }
}

/// Linear blend of two colors; `amount` is the share of `other`.
fn blend(base: Color, other: Color, amount: f32) -> Color {
    Color {
        r: base.r + (other.r - base.r) * amount,
        g: base.g + (other.g - base.g) * amount,
        b: base.b + (other.b - base.b) * amount,
        a: base.a,
    }
}
