use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{SEED_CONFIG, SEED_DRAW};
use crate::error::ErrorCode;
use crate::events::SlotLocked;
use crate::prize;
use crate::state::{Draw, DrawPhase, LotteryConfig};

/// Accounts required to lock the next reel of an in-flight draw.
#[derive(Accounts)]
pub struct LockSlot<'info> {
    /// The player advancing their draw.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The lottery configuration.
    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, LotteryConfig>>,

    /// The draw being advanced.
    #[account(
        mut,
        seeds = [SEED_DRAW, player.key().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Box<Account<'info, Draw>>,

    /// The randomness account committed when the draw started.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Advances the reveal by exactly one phase.
///
/// The first transition ends the warm-up spin: the committed randomness is
/// revealed and the outcome resolved before any reel shows it. Later
/// transitions only lock further reels to that same outcome, each after the
/// configured pause.
pub fn process_lock_slot(ctx: Context<LockSlot>) -> Result<()> {
    let clock = Clock::get()?;
    let config = &ctx.accounts.config;
    let draw = &mut ctx.accounts.draw;

    let next = draw.phase.next_lock().ok_or(ErrorCode::UnexpectedPhase)?;

    let required_slots = match draw.phase {
        DrawPhase::Spinning => config.spin_warmup_slots,
        _ => config.lock_interval_slots,
    };
    require!(
        clock.slot >= draw.phase_slot.saturating_add(required_slots),
        ErrorCode::TransitionTooEarly
    );

    if draw.phase == DrawPhase::Spinning {
        if ctx.accounts.randomness_account_data.key() != draw.randomness_account {
            return Err(ErrorCode::IncorrectRandomnessAccount.into());
        }

        let randomness_data =
            RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
                .map_err(|_| ErrorCode::IncorrectRandomnessAccount)?;
        let revealed_random_value = randomness_data
            .get_value(&clock)
            .map_err(|_| ErrorCode::RandomnessNotResolved)?;

        let draw_bps = prize::draw_value_bps(&revealed_random_value);
        let (option, payout) = prize::resolve_prize(draw.deposit_amount, draw_bps);

        msg!("Draw value: {} bps", draw_bps);
        msg!("Resolved option: {}, payout: {}", option, payout);

        draw.prize_option = option as u8;
        draw.prize_value = payout;
    }

    draw.phase = next;
    draw.phase_slot = clock.slot;

    emit!(SlotLocked {
        player: draw.player,
        locked_slots: draw.phase.locked_slots(),
        prize_value: draw.prize_value,
        slot: clock.slot,
    });

    Ok(())
}
