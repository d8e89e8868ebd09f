//! # Ticket Pricing Module
//!
//! Converts a product's unit cost into a redemption ticket value.
//!
//! ## The Two-Stage Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Ticket Value Calculation                            │
//! │                                                                         │
//! │  Unit Cost: $5.32 (532 cents)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stage 1: raw_ticket_amount ← cost/0.01 × 3.0 markup (= cents × 3)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Raw tickets: 1596                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stage 2: round_up_to_interval                                          │
//! │       ├── find first range with min ≤ 1596 ≤ max → [1500, 2000]        │
//! │       ├── interval = 150                                                │
//! │       └── ceil(1596 / 150) × 150 = 1650                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ticket Value: 1650                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tiered intervals keep ticket denominations "round" at every price point:
//! cheap items quantize to fine increments, expensive items to coarse ones,
//! matching how physical ticket denominations are dispensed at a prize
//! counter.
//!
//! ## Totality
//! Both stages are total functions. Non-positive costs are rejected by the
//! validation layer before a record is created, but the arithmetic here
//! performs no validation of its own: a negative cost flows through Stage 1,
//! misses every range in Stage 2, and takes the last entry's interval as the
//! fallback.

use crate::money::Money;

// =============================================================================
// Ticket Range Table
// =============================================================================

/// A bracket of raw ticket amounts mapped to a rounding interval.
///
/// Both bounds are inclusive. Adjacent ranges share their boundary value;
/// lookup is first-match in table order, so a boundary amount always takes
/// the earlier (finer) range's interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketRange {
    /// Lowest raw ticket amount in this bracket (inclusive).
    pub min: i64,
    /// Highest raw ticket amount in this bracket (inclusive).
    pub max: i64,
    /// Rounding granularity applied within this bracket.
    pub interval: i64,
}

/// The fixed rounding-interval table, covering `[0, +∞)` with no gaps.
///
/// Process-wide immutable constant, defined exactly once. The open-ended
/// last bracket uses `i64::MAX` as its upper bound.
pub const TICKET_RANGES: [TicketRange; 8] = [
    TicketRange { min: 0, max: 100, interval: 5 },
    TicketRange { min: 100, max: 1000, interval: 25 },
    TicketRange { min: 1000, max: 1500, interval: 50 },
    TicketRange { min: 1500, max: 2000, interval: 150 },
    TicketRange { min: 2000, max: 3000, interval: 200 },
    TicketRange { min: 3000, max: 7500, interval: 500 },
    TicketRange { min: 7500, max: 15000, interval: 1000 },
    TicketRange { min: 15000, max: i64::MAX, interval: 2500 },
];

// =============================================================================
// Stage 1: Raw Ticket Amount
// =============================================================================

/// Calculates the raw (unquantized) ticket amount for a unit cost.
///
/// The pricing formula is `(cost / 0.01) × 3.0`: one ticket per cent of
/// cost, then a 3.0× markup. In integer cents that is exactly `cents × 3`,
/// so the raw amount is always integral and boundary comparisons in Stage 2
/// are exact.
///
/// ## Example
/// ```rust
/// use ticketforge_core::money::Money;
/// use ticketforge_core::pricing::raw_ticket_amount;
///
/// assert_eq!(raw_ticket_amount(Money::from_cents(532)), 1596);
/// ```
#[inline]
pub const fn raw_ticket_amount(unit_cost: Money) -> i64 {
    unit_cost.cents() * 3
}

// =============================================================================
// Stage 2: Interval Quantization
// =============================================================================

/// Returns the rounding interval for a raw ticket amount.
///
/// Linear scan over [`TICKET_RANGES`], first match wins. Negative amounts
/// match no range and fall back to the last entry's interval (2500).
pub fn interval_for(raw_tickets: i64) -> i64 {
    TICKET_RANGES
        .iter()
        .find(|range| raw_tickets >= range.min && raw_tickets <= range.max)
        .map(|range| range.interval)
        .unwrap_or(TICKET_RANGES[TICKET_RANGES.len() - 1].interval)
}

/// Rounds a raw ticket amount up to the next multiple of its bracket's
/// interval: `ceil(raw / interval) × interval`.
///
/// Ceiling is toward positive infinity, so for the negative-input fallback
/// path the result is a non-positive multiple of 2500 no smaller than the
/// input (`-100` → `0`, `-3000` → `-2500`).
pub fn round_up_to_interval(raw_tickets: i64) -> i64 {
    let interval = interval_for(raw_tickets);
    // Rust integer division truncates toward zero, which already is the
    // ceiling for negative quotients; bump only when a positive remainder
    // was truncated away.
    let quotient = raw_tickets / interval + if raw_tickets % interval > 0 { 1 } else { 0 };
    quotient * interval
}

/// Calculates the final ticket value for a unit cost.
///
/// Composition of the two stages. This is the single call site the catalog
/// uses when creating or editing a record; the result is cached on the
/// record, never recomputed lazily.
///
/// ## Example
/// ```rust
/// use ticketforge_core::money::Money;
/// use ticketforge_core::pricing::ticket_value;
///
/// // $5.32 → 1596 raw → interval 150 → 1650 tickets
/// assert_eq!(ticket_value(Money::from_cents(532)), 1650);
/// ```
pub fn ticket_value(unit_cost: Money) -> i64 {
    round_up_to_interval(raw_ticket_amount(unit_cost))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_zero_to_infinity_without_gaps() {
        assert_eq!(TICKET_RANGES[0].min, 0);
        assert_eq!(TICKET_RANGES[TICKET_RANGES.len() - 1].max, i64::MAX);
        for pair in TICKET_RANGES.windows(2) {
            // Adjacent brackets share their boundary value
            assert_eq!(pair[0].max, pair[1].min);
        }
    }

    #[test]
    fn test_raw_ticket_amount() {
        // $0.10 → 30 raw tickets
        assert_eq!(raw_ticket_amount(Money::from_cents(10)), 30);
        // $5.32 → 1596
        assert_eq!(raw_ticket_amount(Money::from_cents(532)), 1596);
        // $18.99 → 5697
        assert_eq!(raw_ticket_amount(Money::from_cents(1899)), 5697);
        // Negative cost flows through unvalidated
        assert_eq!(raw_ticket_amount(Money::from_cents(-100)), -300);
    }

    #[test]
    fn test_interval_selection() {
        assert_eq!(interval_for(0), 5);
        assert_eq!(interval_for(30), 5);
        assert_eq!(interval_for(999), 25);
        assert_eq!(interval_for(1596), 150);
        assert_eq!(interval_for(5697), 500);
        assert_eq!(interval_for(30000), 2500);
    }

    #[test]
    fn test_interval_boundary_first_match_wins() {
        // Every shared boundary belongs to the earlier, finer bracket
        assert_eq!(interval_for(100), 5);
        assert_eq!(interval_for(1000), 25);
        assert_eq!(interval_for(1500), 50);
        assert_eq!(interval_for(2000), 150);
        assert_eq!(interval_for(3000), 200);
        assert_eq!(interval_for(7500), 500);
        assert_eq!(interval_for(15000), 1000);
    }

    #[test]
    fn test_interval_negative_fallback() {
        assert_eq!(interval_for(-1), 2500);
        assert_eq!(interval_for(-30000), 2500);
    }

    #[test]
    fn test_round_up_to_interval() {
        // Already a multiple: unchanged
        assert_eq!(round_up_to_interval(30), 30);
        assert_eq!(round_up_to_interval(100), 100);
        // Rounds up, never down
        assert_eq!(round_up_to_interval(31), 35);
        assert_eq!(round_up_to_interval(1596), 1650);
        assert_eq!(round_up_to_interval(5697), 6000);
    }

    #[test]
    fn test_round_up_boundary_values() {
        // Raw 100 sits on the [0,100]/[100,1000] boundary; first match
        // gives interval 5, so 100 stays 100 (not 125)
        assert_eq!(round_up_to_interval(100), 100);
        // Raw 15000 takes the [7500,15000] bracket, interval 1000
        assert_eq!(round_up_to_interval(15000), 15000);
        // Raw 1500 takes the [1000,1500] bracket, interval 50
        assert_eq!(round_up_to_interval(1500), 1500);
    }

    #[test]
    fn test_round_up_negative_fallback() {
        // Ceiling toward positive infinity on the 2500 fallback interval
        assert_eq!(round_up_to_interval(-100), 0);
        assert_eq!(round_up_to_interval(-2500), -2500);
        assert_eq!(round_up_to_interval(-3000), -2500);
        assert_eq!(round_up_to_interval(-5001), -5000);
    }

    #[test]
    fn test_ticket_value_scenarios() {
        // The reference scenarios the redemption counter was calibrated
        // against: cost → raw → quantized
        assert_eq!(ticket_value(Money::from_cents(10)), 30); // $0.10
        assert_eq!(ticket_value(Money::from_cents(532)), 1650); // $5.32
        assert_eq!(ticket_value(Money::from_cents(1899)), 6000); // $18.99
        assert_eq!(ticket_value(Money::from_cents(5000)), 15000); // $50.00
        assert_eq!(ticket_value(Money::from_cents(10000)), 30000); // $100.00
    }

    #[test]
    fn test_ticket_value_is_multiple_of_selected_interval() {
        for cents in [1, 10, 99, 100, 333, 500, 532, 1899, 2500, 5000, 9999, 10000, 50000] {
            let raw = raw_ticket_amount(Money::from_cents(cents));
            let value = ticket_value(Money::from_cents(cents));
            let interval = interval_for(raw);
            assert_eq!(value % interval, 0, "cost {} cents", cents);
            assert!(value >= raw, "quantization never rounds down");
        }
    }

    #[test]
    fn test_ticket_value_monotonic() {
        let mut previous = 0;
        for cents in 1..=20_000 {
            let value = ticket_value(Money::from_cents(cents));
            assert!(
                value >= previous,
                "ticket value dipped at {} cents: {} < {}",
                cents,
                value,
                previous
            );
            previous = value;
        }
    }
}
