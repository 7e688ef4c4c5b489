use crate::error::{Error, Result};
use alloy_primitives::U256;

fn invalid(amount: &str, reason: impl Into<String>) -> Error {
    Error::InvalidAmount {
        amount: amount.to_string(),
        reason: reason.into(),
    }
}

/// Converts a human-entered decimal string into base units, scaling by
/// 10^decimals. Fractional digits beyond the token's precision are rejected
/// rather than rounded.
pub fn to_base_units(amount: &str, decimals: u8) -> Result<U256> {
    if amount.is_empty() {
        return Err(invalid(amount, "empty amount"));
    }
    if amount.starts_with('-') {
        return Err(invalid(amount, "amount must be non-negative"));
    }

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((i, f)) => (i, f),
        None => (amount, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid(amount, "no digits"));
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid(amount, "non-numeric character"));
    }
    if frac_part.len() > decimals as usize {
        return Err(invalid(
            amount,
            format!(
                "{} fractional digits exceeds the token's {decimals}-decimal precision",
                frac_part.len()
            ),
        ));
    }

    let scale = U256::from(10).pow(U256::from(decimals));
    let int_value = if int_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_part, 10).map_err(|_| invalid(amount, "amount too large"))?
    };

    let mut frac_padded = frac_part.to_string();
    frac_padded.push_str(&"0".repeat(decimals as usize - frac_part.len()));
    let frac_value = if frac_padded.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(&frac_padded, 10).map_err(|_| invalid(amount, "amount too large"))?
    };

    int_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(|| invalid(amount, "amount too large"))
}

/// Exact left-inverse of `to_base_units`, up to trailing-zero normalization.
pub fn to_decimal_string(base_units: U256, decimals: u8) -> String {
    let scale = U256::from(10).pow(U256::from(decimals));
    let (quotient, remainder) = base_units.div_rem(scale);

    if remainder.is_zero() {
        return quotient.to_string();
    }

    let digits = remainder.to_string();
    let mut frac = "0".repeat(decimals as usize - digits.len());
    frac.push_str(&digits);
    let frac = frac.trim_end_matches('0');
    format!("{quotient}.{frac}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_fractional_amounts() {
        assert_eq!(to_base_units("0.1", 6).unwrap(), U256::from(100_000u64));
        assert_eq!(to_base_units("1.5", 6).unwrap(), U256::from(1_500_000u64));
        assert_eq!(to_base_units(".5", 6).unwrap(), U256::from(500_000u64));
    }

    #[test]
    fn converts_whole_amounts_at_18_decimals() {
        assert_eq!(
            to_base_units("1", 18).unwrap(),
            U256::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn zero_decimal_tokens() {
        assert_eq!(to_base_units("42", 0).unwrap(), U256::from(42u64));
        assert_eq!(to_decimal_string(U256::from(42u64), 0), "42");
    }

    #[test]
    fn rejects_excess_fractional_digits() {
        let err = to_base_units("0.1234567", 6).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount { .. }));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "-1", "1.2.3", "1e5", "abc", ".", "1,5", "+1"] {
            assert!(
                matches!(to_base_units(bad, 6), Err(Error::InvalidAmount { .. })),
                "expected InvalidAmount for {bad:?}"
            );
        }
    }

    #[test]
    fn large_amounts_do_not_overflow() {
        // one billion tokens at 18 decimals needs more than 64 bits
        let units = to_base_units("1000000000", 18).unwrap();
        assert_eq!(units.to_string(), "1000000000000000000000000000");
    }

    #[test]
    fn round_trips_back_to_the_entered_amount() {
        for (s, d) in [
            ("0.1", 6u8),
            ("1.5", 6),
            ("123.456", 6),
            ("1", 18),
            ("0.000000000000000001", 18),
            ("987654321.123456", 6),
            ("0", 6),
        ] {
            let units = to_base_units(s, d).unwrap();
            assert_eq!(to_decimal_string(units, d), s, "round trip of {s:?}");
        }
    }

    #[test]
    fn display_pads_small_fractions_with_leading_zeros() {
        assert_eq!(to_decimal_string(U256::from(1u64), 6), "0.000001");
        assert_eq!(to_decimal_string(U256::from(1_010_000u64), 6), "1.01");
    }
}
