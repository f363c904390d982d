//! Color palette for the preview.
//!
//! The theme uses a layered surface system for depth perception:
//!
//! - `surface[0]`: App background (deepest layer)
//! - `surface[1]`: Header and input bar
//! - `surface[2]`: AI bubbles
//! - `surface[3]`: Hover states
//! - `surface[4]`: Skeleton placeholder bars
//!
//! User bubbles are filled with the accent color.

use eframe::egui::Color32;

#[derive(Clone, Debug)]
pub struct PreviewTheme {
    pub name: String,
    pub surface: [Color32; 5],
    pub accent: Color32,
    pub on_accent: Color32,
    pub error: Color32,
    pub success: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border_subtle: Color32,
    pub border_medium: Color32,
}

impl PreviewTheme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            surface: [
                Color32::from_rgb(10, 10, 15),
                Color32::from_rgb(19, 19, 26),
                Color32::from_rgb(28, 28, 38),
                Color32::from_rgb(37, 37, 50),
                Color32::from_rgb(56, 56, 74),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            on_accent: Color32::WHITE,
            error: Color32::from_rgb(240, 71, 71),
            success: Color32::from_rgb(67, 181, 129),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_muted: Color32::from_rgb(114, 118, 125),
            border_subtle: Color32::from_rgb(32, 34, 37),
            border_medium: Color32::from_rgb(47, 49, 54),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(246, 246, 247),
                Color32::from_rgb(242, 243, 245),
                Color32::from_rgb(227, 229, 232),
                Color32::from_rgb(212, 215, 220),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            on_accent: Color32::WHITE,
            error: Color32::from_rgb(220, 50, 50),
            success: Color32::from_rgb(47, 150, 100),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_secondary: Color32::from_rgb(79, 86, 96),
            text_muted: Color32::from_rgb(116, 127, 141),
            border_subtle: Color32::from_rgb(230, 232, 236),
            border_medium: Color32::from_rgb(210, 213, 219),
        }
    }

    /// Resolve a persisted theme name; anything unknown is dark.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(PreviewTheme::by_name("light").name, "light");
        assert_eq!(PreviewTheme::by_name("dark").name, "dark");
        assert!(PreviewTheme::by_name("solarized").is_dark());
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in [PreviewTheme::dark(), PreviewTheme::light()] {
            assert_ne!(theme.text_primary, theme.surface[0]);
            assert_ne!(theme.accent, theme.surface[2]);
        }
    }
}
