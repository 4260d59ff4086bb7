//! Text rendering of referee reports.

use std::io::{self, Write};

use crate::referee::{MatchResult, MatchSummary, RoundOutcome, RoundReport};

/// Title line printed at start-up.
pub const TITLE: &str = "ROCK-PAPER-SCISSORS-PLUS REFEREE";

/// Rules banner.
pub const RULES: &str = "Rules:\n\
- Best of 3 rounds\n\
- Moves: rock, paper, scissors, bomb (once)\n\
- Bomb beats all; bomb vs bomb = draw\n\
- Invalid input wastes the round\n";

/// Prompt shown before reading each move.
pub const PROMPT: &str = "Enter your move: ";

pub fn banner(out: &mut impl Write, show_rules: bool) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(44))?;
    if show_rules {
        writeln!(out)?;
        write!(out, "{RULES}")?;
    }
    Ok(())
}

pub fn round(out: &mut impl Write, report: &RoundReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Round {}", report.round)?;

    let winner = match report.outcome {
        RoundOutcome::Wasted => return writeln!(out, "Invalid input. Round wasted."),
        RoundOutcome::User => "USER",
        RoundOutcome::Bot => "BOT",
        RoundOutcome::Draw => "DRAW",
    };

    writeln!(out, "You played: {}", report.user_move)?;
    if let Some(bot_move) = report.bot_move {
        writeln!(out, "Bot played: {bot_move}")?;
    }
    writeln!(out, "Winner: {winner}")
}

pub fn summary(out: &mut impl Write, summary: &MatchSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== GAME OVER ===")?;
    writeln!(
        out,
        "Final Score -> You: {} | Bot: {}",
        summary.user_score, summary.bot_score
    )?;
    let verdict = match summary.result {
        MatchResult::UserWins => "YOU WIN",
        MatchResult::BotWins => "BOT WINS",
        MatchResult::Draw => "DRAW",
    };
    writeln!(out, "{verdict}")
}
