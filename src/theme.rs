//! Visual themes for the form
//!
//! One renderer, several palettes.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named colour theme, selectable in the user config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Cyan, magenta and green on black
    #[default]
    Neon,
    Classic,
    Mono,
}

/// Colours a theme resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Section titles and the form border
    pub accent: Color,
    /// Borders of unfocused fields
    pub border: Color,
    /// Border and cursor of the focused field
    pub focus: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn next(&self) -> Self {
        match self {
            Self::Neon => Self::Classic,
            Self::Classic => Self::Mono,
            Self::Mono => Self::Neon,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Neon => "Neon",
            Self::Classic => "Classic",
            Self::Mono => "Mono",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Neon => Palette {
                accent: Color::Rgb(0x00, 0xf2, 0xff),
                border: Color::Rgb(0xff, 0x00, 0xff),
                focus: Color::Rgb(0x39, 0xff, 0x14),
                text: Color::White,
                muted: Color::DarkGray,
                error: Color::Rgb(0xff, 0x44, 0x44),
                success: Color::Rgb(0x39, 0xff, 0x14),
            },
            Self::Classic => Palette {
                accent: Color::Cyan,
                border: Color::DarkGray,
                focus: Color::Cyan,
                text: Color::Reset,
                muted: Color::DarkGray,
                error: Color::Red,
                success: Color::Green,
            },
            Self::Mono => Palette {
                accent: Color::White,
                border: Color::Gray,
                focus: Color::White,
                text: Color::Reset,
                muted: Color::DarkGray,
                error: Color::White,
                success: Color::White,
            },
        }
    }
}

impl Palette {
    pub fn border_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default().fg(self.focus)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}
