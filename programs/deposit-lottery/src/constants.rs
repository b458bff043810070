use anchor_lang::prelude::*;

// ===== PDA SEEDS =====
pub const SEED_CONFIG: &[u8] = b"lottery_config";
pub const SEED_DRAW: &[u8] = b"draw";
pub const SEED_ENTRY: &[u8] = b"entry";
pub const SEED_HISTORY: &[u8] = b"draw_history";

// ===== PRIZE WEIGHTS (basis points, sum = 10_000) =====
#[constant]
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const PRIZE_COUNT: usize = 4;
pub const PRIZE_WEIGHTS_BPS: [u64; PRIZE_COUNT] = [8_000, 1_000, 900, 100];

// ===== DEPOSIT TIERS =====
pub const TIER_LOW_AMOUNT: u64 = 1_000;
pub const TIER_MID_AMOUNT: u64 = 5_000;
pub const TIER_TOP_AMOUNT: u64 = 10_000;

// ===== PAYOUT TABLES (position 3 is the consolation slip) =====
pub const TIER_LOW_PAYOUTS: [u64; PRIZE_COUNT] = [58, 168, 288, 0];
pub const TIER_MID_PAYOUTS: [u64; PRIZE_COUNT] = [188, 388, 666, 0];
pub const TIER_TOP_PAYOUTS: [u64; PRIZE_COUNT] = [388, 666, 2888, 0];

// ===== REVEAL PACING (slots, ~400ms each) =====
pub const DEFAULT_SPIN_WARMUP_SLOTS: u64 = 5; // ~2s of spinning
pub const DEFAULT_LOCK_INTERVAL_SLOTS: u64 = 2; // ~800ms between slot locks
pub const DEFAULT_REVEAL_DELAY_SLOTS: u64 = 1; // ~400ms before completion
pub const MIN_STAGE_SLOTS: u64 = 1;
pub const MAX_STAGE_SLOTS: u64 = 900; // ~6 minutes

// ===== FIELD LIMITS =====
pub const MAX_USERNAME_LEN: usize = 32;
pub const MAX_PROOF_URI_LEN: usize = 200;

// ===== HISTORY =====
pub const HISTORY_CAP: usize = 10;
