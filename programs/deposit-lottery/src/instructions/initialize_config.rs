use anchor_lang::prelude::*;

use crate::constants::{
    DEFAULT_LOCK_INTERVAL_SLOTS, DEFAULT_REVEAL_DELAY_SLOTS, DEFAULT_SPIN_WARMUP_SLOTS,
    MAX_STAGE_SLOTS, MIN_STAGE_SLOTS, SEED_CONFIG,
};
use crate::error::ErrorCode;
use crate::events::ConfigInitialized;
use crate::state::LotteryConfig;

/// Accounts required to initialize the lottery configuration.
/// This sets up the singleton config account with the reveal pacing and
/// makes the payer the authority.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The account paying for account creation; becomes the authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The config account storing pacing, counters and the authority.
    #[account(
        init,
        payer = payer,
        space = 8 + LotteryConfig::INIT_SPACE,
        seeds = [SEED_CONFIG],
        bump
    )]
    pub config: Box<Account<'info, LotteryConfig>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

pub fn validate_stage_slots(slots: u64) -> Result<()> {
    require!(
        (MIN_STAGE_SLOTS..=MAX_STAGE_SLOTS).contains(&slots),
        ErrorCode::InvalidStageSlots
    );
    Ok(())
}

/// Initializes the lottery configuration. Pacing arguments left unset fall
/// back to the defaults (~2s warm-up, ~800ms between locks, ~400ms before
/// completion).
///
/// # Arguments
/// * `ctx` - Context holding the InitializeConfig accounts
/// * `spin_warmup_slots` - Slots of warm-up spin before the first lock
/// * `lock_interval_slots` - Slots between consecutive slot locks
/// * `reveal_delay_slots` - Slots between the last lock and completion
pub fn process_initialize_config(
    ctx: Context<InitializeConfig>,
    spin_warmup_slots: Option<u64>,
    lock_interval_slots: Option<u64>,
    reveal_delay_slots: Option<u64>,
) -> Result<()> {
    let spin_warmup_slots = spin_warmup_slots.unwrap_or(DEFAULT_SPIN_WARMUP_SLOTS);
    let lock_interval_slots = lock_interval_slots.unwrap_or(DEFAULT_LOCK_INTERVAL_SLOTS);
    let reveal_delay_slots = reveal_delay_slots.unwrap_or(DEFAULT_REVEAL_DELAY_SLOTS);

    validate_stage_slots(spin_warmup_slots)?;
    validate_stage_slots(lock_interval_slots)?;
    validate_stage_slots(reveal_delay_slots)?;

    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.authority = ctx.accounts.payer.key();
    config.paused = false;
    config.spin_warmup_slots = spin_warmup_slots;
    config.lock_interval_slots = lock_interval_slots;
    config.reveal_delay_slots = reveal_delay_slots;
    config.entries_issued = 0;
    config.entries_live = 0;
    config.draws_completed = 0;

    emit!(ConfigInitialized {
        authority: config.authority,
        spin_warmup_slots,
        lock_interval_slots,
        reveal_delay_slots,
    });

    Ok(())
}
