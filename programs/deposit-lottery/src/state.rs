use anchor_lang::prelude::*;

use crate::constants::HISTORY_CAP;

#[account]
#[derive(InitSpace)]
pub struct LotteryConfig {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The authority allowed to manage entries and update this config.
    pub authority: Pubkey,

    /// When set, no new draws may start. Draws already in flight still
    /// run to completion.
    pub paused: bool,

    /// Slots the warm-up spin must run before the first slot locks.
    pub spin_warmup_slots: u64,

    /// Slots between consecutive slot locks.
    pub lock_interval_slots: u64,

    /// Slots between the last lock and the completed reveal.
    pub reveal_delay_slots: u64,

    /// Total entries ever issued. Entry ids come from this counter and
    /// are never reused.
    pub entries_issued: u64,

    /// Entries currently live (issued minus deleted).
    pub entries_live: u64,

    /// Total draws completed.
    pub draws_completed: u64,
}

/// Reveal phases of a draw. A draw only moves forward through these;
/// `Revealed` is terminal.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrawPhase {
    /// Warm-up spin; the outcome is not resolved yet.
    Spinning,
    /// First slot locked to the resolved outcome.
    OneLocked,
    /// Second slot locked.
    TwoLocked,
    /// All three slots locked.
    ThreeLocked,
    /// Sequence complete; the entry has been recorded.
    Revealed,
}

impl DrawPhase {
    /// Next phase on a lock transition, `None` once all slots are locked.
    pub fn next_lock(self) -> Option<DrawPhase> {
        match self {
            DrawPhase::Spinning => Some(DrawPhase::OneLocked),
            DrawPhase::OneLocked => Some(DrawPhase::TwoLocked),
            DrawPhase::TwoLocked => Some(DrawPhase::ThreeLocked),
            DrawPhase::ThreeLocked | DrawPhase::Revealed => None,
        }
    }

    /// Number of slots already locked to the resolved outcome.
    pub fn locked_slots(self) -> u8 {
        match self {
            DrawPhase::Spinning => 0,
            DrawPhase::OneLocked => 1,
            DrawPhase::TwoLocked => 2,
            DrawPhase::ThreeLocked | DrawPhase::Revealed => 3,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == DrawPhase::Revealed
    }
}

/// One draw in flight. The account's existence is the in-flight flag: a
/// player holds at most one, and must close a revealed draw before
/// starting the next.
#[account]
#[derive(InitSpace)]
pub struct Draw {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The wallet playing this draw.
    pub player: Pubkey,

    /// Deposit amount as submitted; tier mapping happens at resolution.
    pub deposit_amount: u64,

    /// Free-text account name carried onto the recorded entry.
    #[max_len(32)]
    pub username: String,

    /// Reference to the uploaded proof-of-deposit image.
    #[max_len(200)]
    pub proof_uri: String,

    /// The committed randomness account this draw resolves from.
    pub randomness_account: Pubkey,

    /// Current reveal phase.
    pub phase: DrawPhase,

    /// Slot of the last phase transition (the start counts as one).
    pub phase_slot: u64,

    /// Resolved payout. Valid once at least one slot is locked.
    pub prize_value: u64,

    /// Index of the resolved option in the tier table.
    pub prize_option: u8,
}

/// The persisted record of one completed draw. Created exactly once, never
/// mutated, deleted only through the admin surface.
#[account]
#[derive(InitSpace)]
pub struct Entry {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Unique id, assigned from the config counter at creation.
    pub id: u64,

    /// Unix timestamp the draw resolved.
    pub created_at: i64,

    /// The wallet that played the draw.
    pub player: Pubkey,

    /// Free-text account name supplied by the player.
    #[max_len(32)]
    pub username: String,

    /// Deposit amount as submitted.
    pub deposit_amount: u64,

    /// Reference to the uploaded proof-of-deposit image.
    #[max_len(200)]
    pub proof_uri: String,

    /// Resolved payout; 0 is the consolation slip.
    pub prize_value: u64,
}

/// One completed draw as shown in the recent-draw feed.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub struct HistoryRecord {
    pub player: Pubkey,
    pub deposit_amount: u64,
    pub prize_value: u64,
    pub recorded_at: i64,
}

/// Bounded feed of recent completed draws, newest first.
#[account]
#[derive(InitSpace)]
pub struct DrawHistory {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Lifetime count of draws recorded through this ring.
    pub total: u64,

    /// Most recent draws, newest first, capped at 10.
    #[max_len(10)]
    pub records: Vec<HistoryRecord>,
}

impl DrawHistory {
    /// Insert at the front and drop anything past the cap.
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_CAP);
        self.total = self.total.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_only_move_forward() {
        let mut phase = DrawPhase::Spinning;
        let mut transitions = 0;
        while let Some(next) = phase.next_lock() {
            assert_eq!(next.locked_slots(), phase.locked_slots() + 1);
            phase = next;
            transitions += 1;
        }
        assert_eq!(transitions, 3);
        assert_eq!(phase, DrawPhase::ThreeLocked);
        assert!(!phase.is_terminal());
        assert!(DrawPhase::Revealed.next_lock().is_none());
        assert!(DrawPhase::Revealed.is_terminal());
    }

    fn record(prize_value: u64) -> HistoryRecord {
        HistoryRecord {
            player: Pubkey::default(),
            deposit_amount: 1_000,
            prize_value,
            recorded_at: 0,
        }
    }

    #[test]
    fn history_keeps_newest_first() {
        let mut history = DrawHistory {
            bump: 0,
            total: 0,
            records: Vec::new(),
        };

        for n in 0..4u64 {
            history.push(record(n));
            assert_eq!(history.records.len(), (n + 1) as usize);
        }
        assert_eq!(history.records[0].prize_value, 3);
        assert_eq!(history.records[3].prize_value, 0);
    }

    #[test]
    fn history_is_capped_at_ten() {
        let mut history = DrawHistory {
            bump: 0,
            total: 0,
            records: Vec::new(),
        };

        for n in 0..25u64 {
            history.push(record(n));
            assert!(history.records.len() <= HISTORY_CAP);
        }
        assert_eq!(history.records.len(), HISTORY_CAP);
        assert_eq!(history.total, 25);
        // newest first: 24 down to 15
        assert_eq!(history.records[0].prize_value, 24);
        assert_eq!(history.records[HISTORY_CAP - 1].prize_value, 15);
    }
}
