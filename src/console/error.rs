/// Failures at the console boundary.
///
/// The referee itself never fails; only reading and writing text can.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before round {round} of the match")]
    EndOfInput { round: u32 },
}
