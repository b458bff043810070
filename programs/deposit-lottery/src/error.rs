use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized: caller is not the configured authority")]
    Unauthorized,
    #[msg("Lottery is paused")]
    LotteryPaused,
    #[msg("Username is empty or exceeds the maximum length")]
    InvalidUsername,
    #[msg("Proof image reference is empty or exceeds the maximum length")]
    InvalidProofUri,
    #[msg("Stage pacing out of range")]
    InvalidStageSlots,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not yet resolved")]
    RandomnessNotResolved,
    #[msg("Incorrect randomness account")]
    IncorrectRandomnessAccount,
    #[msg("Draw is not in the expected phase")]
    UnexpectedPhase,
    #[msg("Not enough slots have elapsed for this transition")]
    TransitionTooEarly,
    #[msg("Draw has not been revealed yet")]
    DrawNotRevealed,
    #[msg("Account is not a live entry")]
    NotAnEntry,
    #[msg("Math overflow")]
    MathOverflow,
}
