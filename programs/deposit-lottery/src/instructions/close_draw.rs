use anchor_lang::prelude::*;

use crate::constants::SEED_DRAW;
use crate::error::ErrorCode;
use crate::events::DrawClosed;
use crate::state::{Draw, DrawPhase};

/// Accounts required to close a revealed draw and reclaim its rent.
/// A draw in any earlier phase cannot be torn down; it can only advance.
#[derive(Accounts)]
pub struct CloseDraw<'info> {
    /// The player closing their draw.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The revealed draw being closed.
    #[account(
        mut,
        close = player,
        seeds = [SEED_DRAW, player.key().as_ref()],
        bump = draw.bump,
        constraint = draw.phase == DrawPhase::Revealed @ ErrorCode::DrawNotRevealed,
    )]
    pub draw: Box<Account<'info, Draw>>,
}

pub fn process_close_draw(ctx: Context<CloseDraw>) -> Result<()> {
    let rent_recovered = ctx.accounts.draw.to_account_info().lamports();

    emit!(DrawClosed {
        player: ctx.accounts.player.key(),
        rent_recovered,
    });

    Ok(())
}
