use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::constants::SEED_CONFIG;
use crate::error::ErrorCode;
use crate::events::EntriesPurged;
use crate::state::{Entry, LotteryConfig};
use crate::utils::close_entry_account;

/// Accounts required to bulk-delete entries.
///
/// The entries to close are passed as remaining accounts; each must be a
/// live Entry owned by this program. Batches may be partial — the
/// instruction can be repeated until the ledger is empty.
#[derive(Accounts)]
pub struct PurgeEntries<'info> {
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
    // remaining_accounts: Entry accounts to close (writable)
}

pub fn process_purge_entries<'info>(
    ctx: Context<'_, '_, 'info, 'info, PurgeEntries<'info>>,
) -> Result<()> {
    let authority_info = ctx.accounts.authority.to_account_info();
    let mut closed: u32 = 0;
    let mut rent_recovered: u64 = 0;

    for account in ctx.remaining_accounts.iter() {
        require!(account.owner == ctx.program_id, ErrorCode::NotAnEntry);
        {
            let data = account.try_borrow_data()?;
            require!(
                data.len() >= 8 && data[..8] == Entry::DISCRIMINATOR,
                ErrorCode::NotAnEntry
            );
        }

        rent_recovered = rent_recovered
            .checked_add(close_entry_account(account, &authority_info)?)
            .ok_or(ErrorCode::MathOverflow)?;
        closed += 1;
    }

    let config = &mut ctx.accounts.config;
    config.entries_live = config.entries_live.saturating_sub(closed as u64);

    msg!("Purged {} entries", closed);

    emit!(EntriesPurged {
        closed,
        rent_recovered,
    });

    Ok(())
}
