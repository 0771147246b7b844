//! Board color schemes.

use clap::ValueEnum;
use ratatui::style::Color;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    BlackAndWhite,
    #[default]
    Brown,
    Blue,
    Green,
}

/// Colors used by the board view. Overlay pairs are (light-square
/// variant, dark-square variant).
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub light_square: Color,
    pub dark_square: Color,
    pub white_piece: Color,
    pub black_piece: Color,
    pub selected: (Color, Color),
    pub legal_move: (Color, Color),
    pub board_label: Color,
}

impl ThemeName {
    pub fn theme(self) -> Theme {
        let (light, dark) = match self {
            Self::BlackAndWhite => (Color::Rgb(0xff, 0xff, 0xff), Color::Rgb(0x33, 0x33, 0x33)),
            Self::Brown => (Color::Rgb(0xf0, 0xd9, 0xb5), Color::Rgb(0xb5, 0x88, 0x60)),
            Self::Blue => (Color::Rgb(0xee, 0xe8, 0xd7), Color::Rgb(0x4c, 0x71, 0x9a)),
            Self::Green => (Color::Rgb(0xf0, 0xf0, 0xf0), Color::Rgb(0x50, 0x70, 0x50)),
        };
        Theme {
            light_square: light,
            dark_square: dark,
            white_piece: Color::White,
            black_piece: Color::Black,
            selected: (Color::LightYellow, Color::Yellow),
            legal_move: (Color::LightBlue, Color::Blue),
            board_label: Color::Yellow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_deserialize_in_snake_case() {
        let theme: ThemeName = serde_json::from_str("\"black_and_white\"").unwrap();
        assert_eq!(theme, ThemeName::BlackAndWhite);
        assert!(serde_json::from_str::<ThemeName>("\"mauve\"").is_err());
    }

    #[test]
    fn default_is_brown() {
        assert_eq!(ThemeName::default(), ThemeName::Brown);
    }
}
