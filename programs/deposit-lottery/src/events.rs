use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub authority: Pubkey,
    pub spin_warmup_slots: u64,
    pub lock_interval_slots: u64,
    pub reveal_delay_slots: u64,
}

#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub paused: bool,
    pub spin_warmup_slots: u64,
    pub lock_interval_slots: u64,
    pub reveal_delay_slots: u64,
}

#[event]
pub struct DrawStarted {
    pub player: Pubkey,
    pub deposit_amount: u64,
    pub randomness_account: Pubkey,
    pub slot: u64,
}

#[event]
pub struct SlotLocked {
    pub player: Pubkey,
    pub locked_slots: u8,
    pub prize_value: u64,
    pub slot: u64,
}

#[event]
pub struct DrawCompleted {
    pub player: Pubkey,
    pub entry_id: u64,
    pub deposit_amount: u64,
    pub prize_value: u64,
    pub timestamp: i64,
}

#[event]
pub struct DrawClosed {
    pub player: Pubkey,
    pub rent_recovered: u64,
}

#[event]
pub struct EntryDeleted {
    pub entry_id: u64,
    pub rent_recovered: u64,
}

#[event]
pub struct EntriesPurged {
    pub closed: u32,
    pub rent_recovered: u64,
}
