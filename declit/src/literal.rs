use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::LiteralError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Radix {
    #[default]
    Decimal,
    Hexadecimal,
    Octal,
    Binary,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
            Self::Octal => 8,
            Self::Binary => 2,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Decimal => "",
            Self::Hexadecimal => "0x",
            Self::Octal => "0o",
            Self::Binary => "0b",
        }
    }
}

/// An integer token as written in the source text. The digit string is
/// kept verbatim (without sign or base prefix), so the value is exact by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerLiteral {
    pub sign: Sign,
    pub digits: String,
    pub radix: Radix,
}

impl IntegerLiteral {
    pub fn new(sign: Sign, digits: impl Into<String>, radix: Radix) -> Self {
        Self {
            sign,
            digits: digits.into(),
            radix,
        }
    }

    pub fn decimal(sign: Sign, digits: impl Into<String>) -> Self {
        Self::new(sign, digits, Radix::Decimal)
    }

    /// Exact value of the literal. An empty or invalid digit string is
    /// `Malformed`; the upstream lexer never produces one, but this
    /// layer must not panic on it.
    pub fn value(&self) -> Result<BigInt, LiteralError> {
        if self.digits.is_empty() || self.digits.starts_with(['+', '-']) {
            return Err(LiteralError::Malformed);
        }
        let magnitude = BigInt::parse_bytes(self.digits.as_bytes(), self.radix.base())
            .ok_or(LiteralError::Malformed)?;
        Ok(if self.sign.is_negative() {
            -magnitude
        } else {
            magnitude
        })
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.sign, self.radix.prefix(), self.digits)
    }
}

/// A decimal float token, held as the digit sequences written in the
/// source. No binary floating-point value is stored; one is derived only
/// at the moment of binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatLiteral {
    pub sign: Sign,
    pub int_digits: String,
    pub frac_digits: String,
    pub exponent: Option<i32>,
}

impl FloatLiteral {
    pub fn new(
        sign: Sign,
        int_digits: impl Into<String>,
        frac_digits: impl Into<String>,
        exponent: Option<i32>,
    ) -> Self {
        Self {
            sign,
            int_digits: int_digits.into(),
            frac_digits: frac_digits.into(),
            exponent,
        }
    }

    pub(crate) fn check_digits(&self) -> Result<(), LiteralError> {
        if self.int_digits.is_empty() && self.frac_digits.is_empty() {
            return Err(LiteralError::Malformed);
        }
        let all_decimal = self
            .int_digits
            .bytes()
            .chain(self.frac_digits.bytes())
            .all(|b| b.is_ascii_digit());
        if all_decimal {
            Ok(())
        } else {
            Err(LiteralError::Malformed)
        }
    }
}

impl fmt::Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_digits = if self.int_digits.is_empty() {
            "0"
        } else {
            &self.int_digits
        };
        write!(f, "{}{}", self.sign, int_digits)?;
        if !self.frac_digits.is_empty() {
            write!(f, ".{}", self.frac_digits)?;
        }
        if let Some(exponent) = self.exponent {
            write!(f, "e{exponent}")?;
        }
        Ok(())
    }
}

/// A parsed scalar token, either kind keeping its exact source digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    Integer(IntegerLiteral),
    Float(FloatLiteral),
}

impl Literal {
    pub fn integer(sign: Sign, digits: impl Into<String>, radix: Radix) -> Self {
        Self::Integer(IntegerLiteral::new(sign, digits, radix))
    }

    pub fn float(
        sign: Sign,
        int_digits: impl Into<String>,
        frac_digits: impl Into<String>,
        exponent: Option<i32>,
    ) -> Self {
        Self::Float(FloatLiteral::new(sign, int_digits, frac_digits, exponent))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(lit) => lit.fmt(f),
            Self::Float(lit) => lit.fmt(f),
        }
    }
}

impl From<IntegerLiteral> for Literal {
    fn from(lit: IntegerLiteral) -> Self {
        Self::Integer(lit)
    }
}

impl From<FloatLiteral> for Literal {
    fn from(lit: FloatLiteral) -> Self {
        Self::Float(lit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_value_is_exact_per_radix() {
        let hex = IntegerLiteral::new(Sign::Positive, "56", Radix::Hexadecimal);
        assert_eq!(hex.value().unwrap(), BigInt::from(0x56));
        let bin = IntegerLiteral::new(Sign::Negative, "1010", Radix::Binary);
        assert_eq!(bin.value().unwrap(), BigInt::from(-10));
        let dec = IntegerLiteral::decimal(Sign::Positive, "18446744073709551615");
        assert_eq!(dec.value().unwrap(), BigInt::from(u64::MAX));
    }

    #[test]
    fn bad_digits_are_malformed_not_panics() {
        let lit = IntegerLiteral::decimal(Sign::Positive, "12x3");
        assert_eq!(lit.value(), Err(LiteralError::Malformed));
        let empty = IntegerLiteral::decimal(Sign::Positive, "");
        assert_eq!(empty.value(), Err(LiteralError::Malformed));
        let signed = IntegerLiteral::decimal(Sign::Positive, "-12");
        assert_eq!(signed.value(), Err(LiteralError::Malformed));
    }

    #[test]
    fn display_reconstructs_lexical_text() {
        let lit = FloatLiteral::new(Sign::Negative, "8", "608480567731124087000", Some(18));
        assert_eq!(lit.to_string(), "-8.608480567731124087000e18");
        let bare = FloatLiteral::new(Sign::Positive, "78", "", Some(2));
        assert_eq!(bare.to_string(), "78e2");
        let frac_only = FloatLiteral::new(Sign::Positive, "", "5", None);
        assert_eq!(frac_only.to_string(), "0.5");
        let hex = Literal::integer(Sign::Positive, "56", Radix::Hexadecimal);
        assert_eq!(hex.to_string(), "0x56");
    }
}
