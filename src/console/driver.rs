//! The input loop: prompt, read a line, play it, render it.

use std::io::{BufRead, Write};

use crate::core::RefereeConfig;
use crate::referee::{MatchSummary, OpponentPolicy, Referee};

use super::error::ConsoleError;
use super::render;

/// Play a full match over text streams.
///
/// Reads one line per round until the referee reports the match over,
/// then renders and returns the final summary. Lines that are not valid
/// UTF-8 are decoded lossily and waste their round like any other invalid
/// move. Input closing early is reported as `ConsoleError::EndOfInput`.
pub fn run_match<O, R, W>(
    referee: &mut Referee<O>,
    config: &RefereeConfig,
    mut input: R,
    mut output: W,
) -> Result<MatchSummary, ConsoleError>
where
    O: OpponentPolicy,
    R: BufRead,
    W: Write,
{
    render::banner(&mut output, config.show_rules)?;

    let mut buf = Vec::new();
    while !referee.is_over() {
        write!(output, "{}", render::PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            let round = referee.state().round_number + 1;
            log::warn!("input closed before round {round}");
            return Err(ConsoleError::EndOfInput { round });
        }

        let line = String::from_utf8_lossy(&buf);
        if let Some(report) = referee.play_round(&line) {
            render::round(&mut output, &report)?;
        }
    }

    let summary = referee
        .conclude()
        .unwrap_or_else(|| MatchSummary::from_state(referee.state()));
    render::summary(&mut output, &summary)?;
    output.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::referee::{MatchResult, ScriptedOpponent};
    use std::io::Cursor;

    fn play(lines: &str, bot: &[Move]) -> (Result<MatchSummary, ConsoleError>, String) {
        play_bytes(lines.as_bytes(), bot)
    }

    fn play_bytes(input: &[u8], bot: &[Move]) -> (Result<MatchSummary, ConsoleError>, String) {
        let mut referee = Referee::new(ScriptedOpponent::new(bot.iter().copied()));
        let config = RefereeConfig::default().with_rules(false);
        let mut out = Vec::new();
        let result = run_match(&mut referee, &config, Cursor::new(input.to_vec()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_match() {
        let (result, text) = play(
            "rock\nPAPER \nlizard\n",
            &[Move::Scissors, Move::Scissors, Move::Rock],
        );

        let summary = result.unwrap();
        assert_eq!(summary.result, MatchResult::Draw);
        assert_eq!((summary.user_score, summary.bot_score), (1, 1));
        assert_eq!(text.matches(render::PROMPT).count(), 3);
        assert!(text.contains("Round wasted."));
        assert!(text.contains("=== GAME OVER ==="));
    }

    #[test]
    fn test_extra_input_is_ignored() {
        let (result, _) = play("rock\nrock\nrock\nrock\n", &[Move::Scissors]);
        assert_eq!(result.unwrap().user_score, 3);
    }

    #[test]
    fn test_non_utf8_line_wastes_round() {
        let (result, text) = play_bytes(b"rock\n\xff\xfe\nrock\n", &[Move::Scissors]);

        let summary = result.unwrap();
        assert_eq!((summary.user_score, summary.bot_score), (2, 0));
        assert_eq!(summary.result, MatchResult::UserWins);
        assert_eq!(text.matches("Round wasted.").count(), 1);
        assert!(text.contains("=== GAME OVER ==="));
    }

    #[test]
    fn test_end_of_input() {
        let (result, _) = play("rock\n", &[Move::Rock]);
        assert!(matches!(result, Err(ConsoleError::EndOfInput { round: 2 })));
    }
}
