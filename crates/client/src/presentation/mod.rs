//! Text and JSON renderings of a finished battle.
mod card;
mod log;
mod theme;

pub use card::{avatar_rows, hp_bar, write_card};
pub use log::write_log;
pub use theme::Theme;

use std::io::{self, Write};

use namebrawl_core::{BattleEnd, BattleReport, Character, Side};
use serde::Serialize;

/// Everything the text view needs.
pub struct BattleView<'a> {
    pub first: &'a Character,
    pub second: &'a Character,
    pub report: &'a BattleReport,
    pub seed: u64,
    pub random_seed: bool,
}

pub fn write_text(out: &mut impl Write, theme: &Theme, view: &BattleView<'_>) -> io::Result<()> {
    let BattleView {
        first,
        second,
        report,
        ..
    } = *view;

    write_card(out, theme, first, first.stats.hp, false)?;
    writeln!(out)?;
    writeln!(out, "{:^24}", theme.bold("VS"))?;
    writeln!(out)?;
    write_card(out, theme, second, second.stats.hp, false)?;
    writeln!(out)?;

    write_log(out, theme, first, second, report)?;
    writeln!(out)?;

    let final_hp = |side: Side| report.final_hp(side).max(0);
    write_card(
        out,
        theme,
        first,
        final_hp(Side::First),
        report.winner == Side::First,
    )?;
    writeln!(out)?;
    write_card(
        out,
        theme,
        second,
        final_hp(Side::Second),
        report.winner == Side::Second,
    )?;
    writeln!(out)?;

    if report.end == BattleEnd::TimedOut {
        writeln!(
            out,
            "{}",
            theme.dim(&format!(
                "Time ran out after {} turns; winner decided on HP.",
                report.turns
            ))
        )?;
    }

    let replay_hint = if view.random_seed {
        format!(" (replay with --seed {})", view.seed)
    } else {
        String::new()
    };
    writeln!(out, "{}", theme.dim(&format!("Seed {}{replay_hint}", view.seed)))?;
    writeln!(
        out,
        "{}",
        theme.dim(&format!("Fingerprint {}", fingerprint_hex(report)?))
    )
}

fn fingerprint_hex(report: &BattleReport) -> io::Result<String> {
    report
        .fingerprint()
        .map(hex::encode)
        .map_err(io::Error::other)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonView<'a> {
    seed: u64,
    characters: [&'a Character; 2],
    report: &'a BattleReport,
    fingerprint: String,
}

pub fn write_json(out: &mut impl Write, view: &BattleView<'_>) -> io::Result<()> {
    let json = JsonView {
        seed: view.seed,
        characters: [view.first, view.second],
        report: view.report,
        fingerprint: fingerprint_hex(view.report)?,
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)
}
