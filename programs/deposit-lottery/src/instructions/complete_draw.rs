use anchor_lang::prelude::*;

use crate::constants::{SEED_CONFIG, SEED_DRAW, SEED_ENTRY, SEED_HISTORY};
use crate::error::ErrorCode;
use crate::events::DrawCompleted;
use crate::state::{Draw, DrawHistory, DrawPhase, Entry, HistoryRecord, LotteryConfig};

/// Accounts required to complete a fully locked draw.
///
/// This ensures that:
/// 1. All three reels are locked before the draw can complete.
/// 2. The entry id comes from the running counter, so ids are never reused.
/// 3. A second completion is impossible: the phase guard rejects a
///    `Revealed` draw and the entry PDA for this id already exists.
#[derive(Accounts)]
pub struct CompleteDraw<'info> {
    /// The player completing their draw.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The lottery configuration, carrying the entry counter.
    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, LotteryConfig>>,

    /// The draw being completed.
    #[account(
        mut,
        seeds = [SEED_DRAW, player.key().as_ref()],
        bump = draw.bump,
        constraint = draw.phase == DrawPhase::ThreeLocked @ ErrorCode::UnexpectedPhase,
    )]
    pub draw: Box<Account<'info, Draw>>,

    /// The record of this completed draw.
    #[account(
        init,
        payer = player,
        space = 8 + Entry::INIT_SPACE,
        seeds = [SEED_ENTRY, config.entries_issued.to_le_bytes().as_ref()],
        bump
    )]
    pub entry: Box<Account<'info, Entry>>,

    /// The recent-draw feed, created on the first completed draw.
    #[account(
        init_if_needed,
        payer = player,
        space = 8 + DrawHistory::INIT_SPACE,
        seeds = [SEED_HISTORY],
        bump
    )]
    pub history: Box<Account<'info, DrawHistory>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Completes the reveal: transitions the draw to `Revealed`, records the
/// entry, appends to the recent-draw feed and emits `DrawCompleted` with
/// the resolved payout. This event fires exactly once per draw.
pub fn process_complete_draw(ctx: Context<CompleteDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let config = &mut ctx.accounts.config;
    let draw = &mut ctx.accounts.draw;

    require!(
        clock.slot >= draw.phase_slot.saturating_add(config.reveal_delay_slots),
        ErrorCode::TransitionTooEarly
    );

    draw.phase = DrawPhase::Revealed;
    draw.phase_slot = clock.slot;

    let entry = &mut ctx.accounts.entry;
    entry.bump = ctx.bumps.entry;
    entry.id = config.entries_issued;
    entry.created_at = clock.unix_timestamp;
    entry.player = draw.player;
    entry.username = draw.username.clone();
    entry.deposit_amount = draw.deposit_amount;
    entry.proof_uri = draw.proof_uri.clone();
    entry.prize_value = draw.prize_value;

    config.entries_issued = config
        .entries_issued
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;
    config.entries_live = config
        .entries_live
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;
    config.draws_completed = config
        .draws_completed
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    let history = &mut ctx.accounts.history;
    history.bump = ctx.bumps.history;
    history.push(HistoryRecord {
        player: draw.player,
        deposit_amount: draw.deposit_amount,
        prize_value: draw.prize_value,
        recorded_at: clock.unix_timestamp,
    });

    msg!("Entry {} recorded, prize: {}", entry.id, entry.prize_value);

    emit!(DrawCompleted {
        player: draw.player,
        entry_id: entry.id,
        deposit_amount: draw.deposit_amount,
        prize_value: draw.prize_value,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
