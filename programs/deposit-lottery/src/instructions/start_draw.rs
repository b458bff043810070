use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{MAX_PROOF_URI_LEN, MAX_USERNAME_LEN, SEED_CONFIG, SEED_DRAW};
use crate::error::ErrorCode;
use crate::events::DrawStarted;
use crate::state::{Draw, DrawPhase, LotteryConfig};

/// Accounts required to start a draw.
///
/// The Draw PDA is seeded by the player, so a player can hold at most one
/// draw at a time; starting again while one is in flight fails at account
/// creation rather than in the handler.
#[derive(Accounts)]
pub struct StartDraw<'info> {
    /// The player submitting the deposit entry.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The lottery configuration.
    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, LotteryConfig>>,

    /// The draw being started.
    #[account(
        init,
        payer = player,
        space = 8 + Draw::INIT_SPACE,
        seeds = [SEED_DRAW, player.key().as_ref()],
        bump
    )]
    pub draw: Box<Account<'info, Draw>>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Starts a draw for the caller.
///
/// Steps performed:
/// 1. Reject when the lottery is paused.
/// 2. Validate the submitted fields.
/// 3. Commit a randomness account that has not been revealed yet.
/// 4. Create the draw in the `Spinning` phase.
///
/// The outcome is not resolved here; it is fixed when the warm-up ends and
/// the first slot locks.
pub fn process_start_draw(
    ctx: Context<StartDraw>,
    deposit_amount: u64,
    username: String,
    proof_uri: String,
) -> Result<()> {
    let clock = Clock::get()?;

    require!(!ctx.accounts.config.paused, ErrorCode::LotteryPaused);
    require!(
        !username.is_empty() && username.len() <= MAX_USERNAME_LEN,
        ErrorCode::InvalidUsername
    );
    require!(
        !proof_uri.is_empty() && proof_uri.len() <= MAX_PROOF_URI_LEN,
        ErrorCode::InvalidProofUri
    );

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| ErrorCode::IncorrectRandomnessAccount)?;
    if randomness_data.seed_slot != clock.slot - 1 {
        return Err(ErrorCode::RandomnessAlreadyRevealed.into());
    }

    let draw = &mut ctx.accounts.draw;
    draw.bump = ctx.bumps.draw;
    draw.player = ctx.accounts.player.key();
    draw.deposit_amount = deposit_amount;
    draw.username = username;
    draw.proof_uri = proof_uri;
    draw.randomness_account = ctx.accounts.randomness_account_data.key();
    draw.phase = DrawPhase::Spinning;
    draw.phase_slot = clock.slot;
    draw.prize_value = 0;
    draw.prize_option = 0;

    emit!(DrawStarted {
        player: draw.player,
        deposit_amount,
        randomness_account: draw.randomness_account,
        slot: clock.slot,
    });

    Ok(())
}
