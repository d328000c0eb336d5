//! Battle log with the HP of both fighters after every entry.

use std::io::{self, Write};

use namebrawl_core::{BattleReport, Character, Replay};

use super::card::hp_bar;
use super::theme::Theme;

const LOG_HP_BAR_WIDTH: usize = 10;

pub fn write_log(
    out: &mut impl Write,
    theme: &Theme,
    first: &Character,
    second: &Character,
    report: &BattleReport,
) -> io::Result<()> {
    let width = report
        .log
        .iter()
        .map(|entry| entry.message.chars().count())
        .max()
        .unwrap_or(0);

    for frame in Replay::new(&report.log, first, second) {
        let entry = frame.entry;
        let padding = width.saturating_sub(entry.message.chars().count());

        if entry.is_system() {
            writeln!(out, "{:>4}  {}", entry.turn, theme.log_message(entry))?;
            continue;
        }

        let [first_hp, second_hp] = frame.hp;
        writeln!(
            out,
            "{:>4}  {}{}  {} {}  {} {}",
            entry.turn,
            theme.log_message(entry),
            " ".repeat(padding),
            hp_bar(theme, first_hp, first.stats.max_hp, LOG_HP_BAR_WIDTH),
            first_hp,
            hp_bar(theme, second_hp, second.stats.max_hp, LOG_HP_BAR_WIDTH),
            second_hp,
        )?;
    }

    Ok(())
}
