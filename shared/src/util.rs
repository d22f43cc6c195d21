use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at POS scale)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Convert integer cents to a currency amount for API responses.
///
/// All storage and summation happen in integer cents; this is the only
/// place integer money becomes floating point.
pub fn cents_to_amount(cents: i64) -> f64 {
    Decimal::new(cents, 2).to_f64().unwrap_or(0.0)
}

/// Convert a currency amount from an API payload to integer cents.
///
/// Rounds to 2 decimal places (banker-free, half-up via rust_decimal's
/// default midpoint strategy). Returns `None` for NaN/infinite input or
/// amounts outside the i64 cent range.
pub fn amount_to_cents(amount: f64) -> Option<i64> {
    let dec = Decimal::from_f64_retain(amount)?;
    (dec.round_dp(2) * Decimal::ONE_HUNDRED).to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_round_trip() {
        assert_eq!(cents_to_amount(1975), 19.75);
        assert_eq!(cents_to_amount(0), 0.0);
        assert_eq!(amount_to_cents(12.50), Some(1250));
        assert_eq!(amount_to_cents(7.25), Some(725));
        assert_eq!(amount_to_cents(0.0), Some(0));
    }

    #[test]
    fn amount_to_cents_rounds_to_two_places() {
        assert_eq!(amount_to_cents(3.999), Some(400));
        assert_eq!(amount_to_cents(3.001), Some(300));
    }

    #[test]
    fn amount_to_cents_rejects_non_finite() {
        assert_eq!(amount_to_cents(f64::NAN), None);
        assert_eq!(amount_to_cents(f64::INFINITY), None);
    }

    #[test]
    fn snowflake_ids_are_positive_and_distinct() {
        let a = snowflake_id();
        let b = snowflake_id();
        assert!(a > 0);
        assert!(b > 0);
        // Same millisecond collisions are possible but vanishingly rare
        // with 12 random bits; distinct draws are the expected case.
        assert!(a != b || snowflake_id() != a);
    }
}
