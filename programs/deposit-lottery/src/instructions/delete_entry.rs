use anchor_lang::prelude::*;

use crate::constants::{SEED_CONFIG, SEED_ENTRY};
use crate::error::ErrorCode;
use crate::events::EntryDeleted;
use crate::state::{Entry, LotteryConfig};

/// Accounts required to delete a single entry.
/// Only the configured authority may do this; the entry's rent goes to it.
#[derive(Accounts)]
pub struct DeleteEntry<'info> {
    #[account(
        mut,
        constraint = authority.key() == config.authority @ ErrorCode::Unauthorized,
    )]
    pub authority: Signer<'info>,

    /// The lottery configuration, carrying the live-entry counter.
    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, LotteryConfig>>,

    /// The entry being deleted.
    #[account(
        mut,
        close = authority,
        seeds = [SEED_ENTRY, entry.id.to_le_bytes().as_ref()],
        bump = entry.bump,
    )]
    pub entry: Box<Account<'info, Entry>>,
}

pub fn process_delete_entry(ctx: Context<DeleteEntry>) -> Result<()> {
    let rent_recovered = ctx.accounts.entry.to_account_info().lamports();

    let config = &mut ctx.accounts.config;
    config.entries_live = config.entries_live.saturating_sub(1);

    emit!(EntryDeleted {
        entry_id: ctx.accounts.entry.id,
        rent_recovered,
    });

    Ok(())
}
