//! Character card: avatar, class, HP bar, stats, and skill.

use std::io::{self, Write};

use crossterm::style::Color;
use namebrawl_core::{Avatar, Character};

use super::theme::{Theme, hp_color, hp_percent, rgb};

pub const HP_BAR_WIDTH: usize = 20;

pub fn write_card(
    out: &mut impl Write,
    theme: &Theme,
    character: &Character,
    hp: i32,
    is_winner: bool,
) -> io::Result<()> {
    let crown = if is_winner {
        format!("  {}", theme.paint("WINNER", Color::Yellow))
    } else {
        String::new()
    };
    writeln!(
        out,
        "{}  {}  {}{}",
        theme.fighter(&character.name, character.color),
        theme.bold(character.class.as_ref()),
        theme.dim(&format!("{} ({})", character.color, character.id)),
        crown
    )?;

    for row in avatar_rows(theme, &character.avatar()) {
        writeln!(out, "  {row}")?;
    }

    let stats = &character.stats;
    writeln!(
        out,
        "HP  {} {}/{}",
        hp_bar(theme, hp, stats.max_hp, HP_BAR_WIDTH),
        hp.max(0),
        stats.max_hp
    )?;
    writeln!(
        out,
        "ATK {}  DEF {}  SPD {}",
        theme.paint(&stats.attack.to_string(), Color::Red),
        theme.paint(&stats.defense.to_string(), Color::Blue),
        theme.paint(&stats.speed.to_string(), Color::Green),
    )?;

    let skill = character.class.skill();
    writeln!(
        out,
        "Skill {}: {}",
        theme.bold(skill.name),
        theme.dim(skill.description)
    )
}

/// One string per avatar row; every cell is two columns wide.
pub fn avatar_rows(theme: &Theme, avatar: &Avatar) -> Vec<String> {
    let fill = if theme.is_colored() { "██" } else { "##" };
    let empty = if theme.is_colored() { "  " } else { ".." };
    let color = rgb(avatar.color);

    avatar
        .rows()
        .map(|row| {
            row.iter()
                .map(|&on| {
                    if on {
                        theme.paint(fill, color)
                    } else {
                        empty.to_owned()
                    }
                })
                .collect()
        })
        .collect()
}

/// Fixed-width HP bar coloured by remaining health.
pub fn hp_bar(theme: &Theme, hp: i32, max_hp: i32, width: usize) -> String {
    let percent = usize::try_from(hp_percent(hp, max_hp)).unwrap_or(0);
    let filled = (percent * width).div_ceil(100).min(width);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    format!("[{}]", theme.paint(&bar, hp_color(hp, max_hp)))
}
