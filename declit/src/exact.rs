use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::error::LiteralError;
use crate::literal::FloatLiteral;

// Largest decimal scale worth materializing: i128 tops out at 39 digits,
// so any non-zero mantissa scaled past this is out of range for every
// destination width.
const MAX_SCALE: i64 = 38;

impl FloatLiteral {
    /// Determines whether the literal denotes an exact integer and, if
    /// so, returns that integer. The literal is treated as
    /// `sign * (int_digits ++ frac_digits) * 10^(exponent - len(frac))`
    /// and evaluated with decimal digit arithmetic only; no binary
    /// float is involved at any point, so values such as
    /// `-8.608480567731124087000e+18` survive untouched.
    pub fn exact_integer(&self) -> Result<BigInt, LiteralError> {
        self.check_digits()?;
        let mut combined = String::with_capacity(self.int_digits.len() + self.frac_digits.len());
        combined.push_str(&self.int_digits);
        combined.push_str(&self.frac_digits);
        let scale = i64::from(self.exponent.unwrap_or(0)) - self.frac_digits.len() as i64;

        let magnitude = if scale >= 0 {
            let mantissa = parse_decimal(&combined)?;
            if mantissa.is_zero() {
                mantissa
            } else if scale > MAX_SCALE {
                return Err(LiteralError::OutOfRange);
            } else {
                mantissa * BigInt::from(10u8).pow(scale as u32)
            }
        } else {
            let dropped = scale.unsigned_abs() as usize;
            if dropped >= combined.len() {
                // The whole digit sequence sits right of the decimal
                // point; only an all-zero mantissa is still integral.
                if combined.bytes().all(|b| b == b'0') {
                    BigInt::zero()
                } else {
                    return Err(LiteralError::NotIntegral);
                }
            } else {
                let (head, tail) = combined.split_at(combined.len() - dropped);
                if tail.bytes().all(|b| b == b'0') {
                    parse_decimal(head)?
                } else {
                    return Err(LiteralError::NotIntegral);
                }
            }
        };

        Ok(if self.sign.is_negative() {
            -magnitude
        } else {
            magnitude
        })
    }

    /// Nearest-representable `f64`, rounded once from the decimal text.
    pub fn to_f64(&self) -> Result<f64, LiteralError> {
        self.check_digits()?;
        self.to_string().parse().map_err(|_| LiteralError::Malformed)
    }

    /// Nearest-representable `f32`, rounded once from the decimal text
    /// (not narrowed through `f64`).
    pub fn to_f32(&self) -> Result<f32, LiteralError> {
        self.check_digits()?;
        self.to_string().parse().map_err(|_| LiteralError::Malformed)
    }
}

fn parse_decimal(digits: &str) -> Result<BigInt, LiteralError> {
    BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(LiteralError::Malformed)
}

/// Range-checks an exact integer against the destination primitive,
/// widening through `i128` (which covers every `i8..=u64` destination).
pub fn cast_integral<T>(value: &BigInt) -> Result<T, LiteralError>
where
    T: TryFrom<i128>,
{
    let wide = value.to_i128().ok_or(LiteralError::OutOfRange)?;
    T::try_from(wide).map_err(|_| LiteralError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Sign;

    fn float(sign: Sign, int: &str, frac: &str, exp: Option<i32>) -> FloatLiteral {
        FloatLiteral::new(sign, int, frac, exp)
    }

    #[test]
    fn negative_scale_with_zero_suffix_is_exact() {
        // -8.608480567731124087000e+18 == -8608480567731124087, which a
        // round-trip through f64 would corrupt.
        let lit = float(Sign::Negative, "8", "608480567731124087000", Some(18));
        assert_eq!(
            lit.exact_integer().unwrap(),
            BigInt::from(-8_608_480_567_731_124_087_i64)
        );
    }

    #[test]
    fn fractional_zeros_are_stripped() {
        let lit = float(Sign::Positive, "64", "0", None);
        assert_eq!(lit.exact_integer().unwrap(), BigInt::from(64));
        let lit = float(Sign::Positive, "0", "000", None);
        assert_eq!(lit.exact_integer().unwrap(), BigInt::zero());
    }

    #[test]
    fn positive_scale_multiplies_out() {
        let lit = float(Sign::Positive, "78", "", Some(2));
        assert_eq!(lit.exact_integer().unwrap(), BigInt::from(7800));
        let lit = float(Sign::Positive, "9", "2", Some(1));
        assert_eq!(lit.exact_integer().unwrap(), BigInt::from(92));
    }

    #[test]
    fn fractional_remainder_is_not_integral() {
        let lit = float(Sign::Positive, "1", "5", None);
        assert_eq!(lit.exact_integer(), Err(LiteralError::NotIntegral));
        let lit = float(Sign::Positive, "5", "", Some(-3));
        assert_eq!(lit.exact_integer(), Err(LiteralError::NotIntegral));
        let lit = float(Sign::Negative, "12", "34", Some(1));
        assert_eq!(lit.exact_integer(), Err(LiteralError::NotIntegral));
    }

    #[test]
    fn huge_scale_is_out_of_range_without_blowup() {
        let lit = float(Sign::Positive, "1", "", Some(9999));
        assert_eq!(lit.exact_integer(), Err(LiteralError::OutOfRange));
        // A zero mantissa stays zero no matter the exponent.
        let lit = float(Sign::Positive, "0", "", Some(9999));
        assert_eq!(lit.exact_integer().unwrap(), BigInt::zero());
    }

    #[test]
    fn round_trip_over_sampled_64_bit_values() {
        let samples: [i128; 7] = [
            0,
            1,
            -1,
            64,
            i64::MAX as i128,
            i64::MIN as i128,
            u64::MAX as i128,
        ];
        for v in samples {
            let sign = if v < 0 { Sign::Negative } else { Sign::Positive };
            let digits = v.unsigned_abs().to_string();
            // Zero-suffix fractional form, `v.000`.
            let lit = FloatLiteral::new(sign, digits.clone(), "000", None);
            assert_eq!(lit.exact_integer().unwrap(), BigInt::from(v));
            // Scientific form, `d.ddd000e<len-1>`, as in the i64 fixture.
            if digits.len() > 1 {
                let exponent = (digits.len() - 1) as i32;
                let lit = FloatLiteral::new(
                    sign,
                    &digits[..1],
                    format!("{}000", &digits[1..]),
                    Some(exponent),
                );
                assert_eq!(lit.exact_integer().unwrap(), BigInt::from(v));
            }
        }
    }

    #[test]
    fn empty_digit_pair_is_malformed() {
        let lit = float(Sign::Positive, "", "", Some(1));
        assert_eq!(lit.exact_integer(), Err(LiteralError::Malformed));
        let lit = float(Sign::Positive, "1x", "0", None);
        assert_eq!(lit.exact_integer(), Err(LiteralError::Malformed));
    }

    #[test]
    fn cast_enforces_destination_width() {
        assert_eq!(cast_integral::<u8>(&BigInt::from(255)).unwrap(), 255u8);
        assert_eq!(
            cast_integral::<u8>(&BigInt::from(256)),
            Err(LiteralError::OutOfRange)
        );
        assert_eq!(cast_integral::<u16>(&BigInt::from(256)).unwrap(), 256u16);
        assert_eq!(
            cast_integral::<i64>(&BigInt::from(u64::MAX)),
            Err(LiteralError::OutOfRange)
        );
        assert_eq!(
            cast_integral::<u64>(&BigInt::from(-1)),
            Err(LiteralError::OutOfRange)
        );
    }

    #[test]
    fn nearest_float_conversion_rounds_once() {
        let lit = float(Sign::Positive, "78", "", Some(2));
        assert_eq!(lit.to_f64().unwrap(), 7800.0);
        let lit = float(Sign::Positive, "0", "1", None);
        assert_eq!(lit.to_f32().unwrap(), 0.1f32);
        assert_eq!(lit.to_f64().unwrap(), 0.1f64);
    }
}
