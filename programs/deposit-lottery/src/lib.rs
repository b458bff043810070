use anchor_lang::prelude::*;
use instructions::*;

/// Program-wide constants: PDA seeds, prize weights and payout tables,
/// reveal pacing defaults and field limits.
pub mod constants;

/// Custom error types returned by instruction handlers.
pub mod error;

/// Events emitted on every state change; `DrawCompleted` carries the
/// resolved payout of a finished draw.
pub mod events;

/// Instruction handlers: config management, the staged draw, and the
/// entry admin surface.
pub mod instructions;

/// Pure prize logic: tier tables and weighted outcome selection.
pub mod prize;

/// On-chain state: the config singleton, in-flight draws, recorded
/// entries and the recent-draw feed.
pub mod state;

/// Account housekeeping helpers.
pub mod utils;

declare_id!("6wRYRJcyfPKSPkPDfZqihynVXzSRcSbZBxAaiMBUpuQm");

#[program]
pub mod deposit_lottery {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        spin_warmup_slots: Option<u64>,
        lock_interval_slots: Option<u64>,
        reveal_delay_slots: Option<u64>,
    ) -> Result<()> {
        process_initialize_config(
            ctx,
            spin_warmup_slots,
            lock_interval_slots,
            reveal_delay_slots,
        )
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        paused: Option<bool>,
        spin_warmup_slots: Option<u64>,
        lock_interval_slots: Option<u64>,
        reveal_delay_slots: Option<u64>,
    ) -> Result<()> {
        process_update_config(
            ctx,
            paused,
            spin_warmup_slots,
            lock_interval_slots,
            reveal_delay_slots,
        )
    }

    pub fn start_draw(
        ctx: Context<StartDraw>,
        deposit_amount: u64,
        username: String,
        proof_uri: String,
    ) -> Result<()> {
        process_start_draw(ctx, deposit_amount, username, proof_uri)
    }

    pub fn lock_slot(ctx: Context<LockSlot>) -> Result<()> {
        process_lock_slot(ctx)
    }

    pub fn complete_draw(ctx: Context<CompleteDraw>) -> Result<()> {
        process_complete_draw(ctx)
    }

    pub fn close_draw(ctx: Context<CloseDraw>) -> Result<()> {
        process_close_draw(ctx)
    }

    pub fn delete_entry(ctx: Context<DeleteEntry>) -> Result<()> {
        process_delete_entry(ctx)
    }

    pub fn purge_entries<'info>(
        ctx: Context<'_, '_, 'info, 'info, PurgeEntries<'info>>,
    ) -> Result<()> {
        process_purge_entries(ctx)
    }
}
