use anchor_lang::prelude::*;

use crate::constants::SEED_CONFIG;
use crate::error::ErrorCode;
use crate::events::ConfigUpdated;
use crate::instructions::initialize_config::validate_stage_slots;
use crate::state::LotteryConfig;

/// Accounts required to update the lottery configuration.
/// Only the configured authority may do this.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        constraint = authority.key() == config.authority @ ErrorCode::Unauthorized,
    )]
    pub authority: Signer<'info>,

    /// The config account storing pacing, counters and the authority.
    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, LotteryConfig>>,
}

/// Updates the pause flag and reveal pacing. Arguments left unset keep
/// their current value.
pub fn process_update_config(
    ctx: Context<UpdateConfig>,
    paused: Option<bool>,
    spin_warmup_slots: Option<u64>,
    lock_interval_slots: Option<u64>,
    reveal_delay_slots: Option<u64>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    if let Some(paused) = paused {
        config.paused = paused;
    }
    if let Some(slots) = spin_warmup_slots {
        validate_stage_slots(slots)?;
        config.spin_warmup_slots = slots;
    }
    if let Some(slots) = lock_interval_slots {
        validate_stage_slots(slots)?;
        config.lock_interval_slots = slots;
    }
    if let Some(slots) = reveal_delay_slots {
        validate_stage_slots(slots)?;
        config.reveal_delay_slots = slots;
    }

    emit!(ConfigUpdated {
        authority: config.authority,
        paused: config.paused,
        spin_warmup_slots: config.spin_warmup_slots,
        lock_interval_slots: config.lock_interval_slots,
        reveal_delay_slots: config.reveal_delay_slots,
    });

    Ok(())
}
