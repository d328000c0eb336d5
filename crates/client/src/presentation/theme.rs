//! Terminal styling.
//!
//! All colour goes through [`Theme`], so `--no-color` produces plain text
//! with no escape sequences at all.

use crossterm::style::{Color, Stylize};
use namebrawl_core::{BattleLogEntry, HexColor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    pub const fn plain() -> Self {
        Self::new(false)
    }

    pub const fn is_colored(&self) -> bool {
        self.color
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_owned()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_owned()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, Color::DarkGrey)
    }

    /// Fighter name in its own colour.
    pub fn fighter(&self, name: &str, color: HexColor) -> String {
        if self.color {
            name.with(rgb(color)).bold().to_string()
        } else {
            name.to_owned()
        }
    }

    /// Styles a log message by what happened.
    pub fn log_message(&self, entry: &BattleLogEntry) -> String {
        let message = entry.message.as_str();
        if !self.color {
            return message.to_owned();
        }

        if entry.is_system() {
            message.with(Color::Yellow).bold().to_string()
        } else if entry.is_skill {
            message.with(Color::Cyan).to_string()
        } else if entry.is_dodge {
            message.with(Color::DarkGrey).to_string()
        } else if entry.is_crit {
            message.with(Color::Red).bold().to_string()
        } else {
            message.to_owned()
        }
    }
}

pub fn rgb(color: HexColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb { r, g, b }
}

/// Green above half health, yellow above a fifth, red below.
pub fn hp_color(hp: i32, max_hp: i32) -> Color {
    let percent = hp_percent(hp, max_hp);
    if percent > 50 {
        Color::Green
    } else if percent > 20 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Remaining HP in whole percent, clamped to `0..=100`.
pub fn hp_percent(hp: i32, max_hp: i32) -> i64 {
    if max_hp <= 0 {
        return 0;
    }
    (i64::from(hp.max(0)) * 100 / i64::from(max_hp)).clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_emits_no_escapes() {
        let theme = Theme::plain();
        assert_eq!(theme.paint("hit", Color::Red), "hit");
        assert_eq!(theme.fighter("Trae", HexColor::new(1, 2, 3)), "Trae");
    }

    #[test]
    fn colored_theme_wraps_text() {
        let theme = Theme::new(true);
        let painted = theme.fighter("Trae", HexColor::new(0x69, 0xf1, 0xb7));
        assert!(painted.contains("Trae"));
        assert!(painted.contains('\u{1b}'));
    }

    #[test]
    fn hp_thresholds() {
        assert_eq!(hp_color(100, 100), Color::Green);
        assert_eq!(hp_color(50, 100), Color::Yellow);
        assert_eq!(hp_color(20, 100), Color::Red);
        assert_eq!(hp_percent(-4, 150), 0);
        assert_eq!(hp_percent(5, 0), 0);
    }
}
