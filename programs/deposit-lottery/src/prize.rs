use crate::constants::{
    BPS_DENOMINATOR, PRIZE_COUNT, PRIZE_WEIGHTS_BPS, TIER_LOW_AMOUNT, TIER_LOW_PAYOUTS,
    TIER_MID_AMOUNT, TIER_MID_PAYOUTS, TIER_TOP_PAYOUTS,
};

/// Deposit tiers. Each tier carries its own payout table; the weights are
/// shared across tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Low,
    Mid,
    Top,
}

impl Tier {
    /// Map a submitted deposit amount to its tier.
    /// Unrecognized amounts resolve against the top tier so a draw never
    /// fails on bad input.
    pub fn from_amount(amount: u64) -> Self {
        match amount {
            TIER_LOW_AMOUNT => Tier::Low,
            TIER_MID_AMOUNT => Tier::Mid,
            _ => Tier::Top,
        }
    }

    /// Ordered payout table for this tier. Position 3 is the consolation
    /// slip, payout 0.
    pub fn payouts(self) -> [u64; PRIZE_COUNT] {
        match self {
            Tier::Low => TIER_LOW_PAYOUTS,
            Tier::Mid => TIER_MID_PAYOUTS,
            Tier::Top => TIER_TOP_PAYOUTS,
        }
    }
}

/// Reduce 32 bytes of oracle randomness to a draw value in [0, 10_000).
/// Uses the first 16 bytes as a little-endian u128 before the modulo.
pub fn draw_value_bps(randomness: &[u8; 32]) -> u64 {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&randomness[..16]);
    let random_value = u128::from_le_bytes(bytes);

    (random_value % BPS_DENOMINATOR as u128) as u64
}

/// Select the winning option for a draw value in [0, 10_000).
/// Walks the weight table accumulating mass; the first option whose
/// cumulative weight exceeds the draw wins. Falls back to option 0 so a
/// draw always resolves.
pub fn select_option(draw_bps: u64) -> usize {
    let mut cumulative = 0u64;

    for (index, weight) in PRIZE_WEIGHTS_BPS.iter().enumerate() {
        cumulative += weight;
        if draw_bps < cumulative {
            return index;
        }
    }

    0
}

/// Resolve a submitted deposit amount and draw value to a payout.
pub fn resolve_prize(deposit_amount: u64, draw_bps: u64) -> (usize, u64) {
    let option = select_option(draw_bps);
    let payout = Tier::from_amount(deposit_amount).payouts()[option];
    (option, payout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TIER_TOP_AMOUNT;

    #[test]
    fn weights_cover_full_range() {
        assert_eq!(PRIZE_WEIGHTS_BPS.iter().sum::<u64>(), BPS_DENOMINATOR);
    }

    #[test]
    fn selection_boundaries() {
        // [0, 8000) -> 0, [8000, 9000) -> 1, [9000, 9900) -> 2, [9900, 10000) -> 3
        assert_eq!(select_option(0), 0);
        assert_eq!(select_option(7_999), 0);
        assert_eq!(select_option(8_000), 1);
        assert_eq!(select_option(8_999), 1);
        assert_eq!(select_option(9_000), 2);
        assert_eq!(select_option(9_899), 2);
        assert_eq!(select_option(9_900), 3);
        assert_eq!(select_option(9_999), 3);
    }

    #[test]
    fn payout_tables_rise_then_consolation() {
        for tier in [Tier::Low, Tier::Mid, Tier::Top] {
            let payouts = tier.payouts();
            assert!(payouts[0] < payouts[1] && payouts[1] < payouts[2]);
            assert_eq!(payouts[3], 0);
        }
    }

    #[test]
    fn mid_tier_common_draw() {
        // 0.05 -> the 80% option for the mid tier
        let (option, payout) = resolve_prize(TIER_MID_AMOUNT, 500);
        assert_eq!(option, 0);
        assert_eq!(payout, 188);
    }

    #[test]
    fn top_tier_rare_draw_is_consolation() {
        // 0.995 -> the 1% option, non-monetary
        let (option, payout) = resolve_prize(TIER_TOP_AMOUNT, 9_950);
        assert_eq!(option, 3);
        assert_eq!(payout, 0);
    }

    #[test]
    fn unknown_amount_uses_top_table() {
        assert_eq!(Tier::from_amount(777), Tier::Top);
        assert_eq!(resolve_prize(777, 0), resolve_prize(TIER_TOP_AMOUNT, 0));
    }

    #[test]
    fn selection_is_idempotent() {
        for draw in [0, 500, 8_000, 9_899, 9_999] {
            assert_eq!(select_option(draw), select_option(draw));
            assert_eq!(
                resolve_prize(TIER_MID_AMOUNT, draw),
                resolve_prize(TIER_MID_AMOUNT, draw)
            );
        }
    }

    #[test]
    fn draw_value_stays_in_range() {
        assert!(draw_value_bps(&[0xFF; 32]) < BPS_DENOMINATOR);
        assert_eq!(draw_value_bps(&[0; 32]), 0);
    }
}
