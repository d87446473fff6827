use declit::{
    cast_integral, FloatLiteral, FloatingValue, IntegerLiteral, IntegralValue, Literal,
    NumericValue,
};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::descriptor::{Descriptor, DestKind};
use crate::error::FailureKind;

/// Coercion policy for one top-level decode call, applied uniformly to
/// every leaf bind and never overridden per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoercionMode {
    #[default]
    Strict,
    Lax,
}

impl CoercionMode {
    pub fn is_lax(self) -> bool {
        matches!(self, Self::Lax)
    }
}

/// Binds a parsed literal to a destination descriptor under the given
/// mode.
///
/// Strict requires the literal's syntactic family to match the
/// destination's family exactly (integer overflow still fails). Lax
/// additionally permits integer literals into float destinations
/// (nearest-representable, precision loss accepted) and float literals
/// into integer destinations when their exact decimal value is integral
/// and in range. Optionality does not change coercion; the binder
/// allocates the present-value wrapper around a successful result.
pub fn bind(
    literal: &Literal,
    destination: Descriptor,
    mode: CoercionMode,
) -> Result<NumericValue, FailureKind> {
    let kind = destination.kind;
    match literal {
        Literal::Integer(lit) => bind_integer(lit, kind, mode),
        Literal::Float(lit) => bind_float(lit, kind, mode),
    }
}

fn bind_integer(
    lit: &IntegerLiteral,
    kind: DestKind,
    mode: CoercionMode,
) -> Result<NumericValue, FailureKind> {
    match kind {
        DestKind::F32 if mode.is_lax() => {
            let value = lit.value()?;
            let nearest = value.to_f32().ok_or(FailureKind::OutOfRange)?;
            finite(nearest.into())
        }
        DestKind::F64 if mode.is_lax() => {
            let value = lit.value()?;
            let nearest = value.to_f64().ok_or(FailureKind::OutOfRange)?;
            finite(nearest.into())
        }
        DestKind::F32 | DestKind::F64 => Err(FailureKind::TypeMismatch),
        _ => {
            let value = lit.value()?;
            Ok(NumericValue::Integral(integral_value(&value, kind)?))
        }
    }
}

fn bind_float(
    lit: &FloatLiteral,
    kind: DestKind,
    mode: CoercionMode,
) -> Result<NumericValue, FailureKind> {
    match kind {
        // Float destinations are inexact by nature; nearest-representable
        // conversion applies in both modes. A parse that saturates past
        // the destination width is out of range, same as the integer
        // widening path.
        DestKind::F32 => finite(FloatingValue::F32(lit.to_f32()?)),
        DestKind::F64 => finite(FloatingValue::F64(lit.to_f64()?)),
        // A float literal reaches an integer destination only under Lax,
        // and only through the exact decimal path. Never through an
        // intermediate binary float.
        _ if mode.is_lax() => {
            let value = lit.exact_integer()?;
            Ok(NumericValue::Integral(integral_value(&value, kind)?))
        }
        _ => Err(FailureKind::TypeMismatch),
    }
}

fn integral_value(value: &BigInt, kind: DestKind) -> Result<IntegralValue, FailureKind> {
    Ok(match kind {
        DestKind::I8 => IntegralValue::I8(cast_integral(value)?),
        DestKind::I16 => IntegralValue::I16(cast_integral(value)?),
        DestKind::I32 => IntegralValue::I32(cast_integral(value)?),
        DestKind::I64 => IntegralValue::I64(cast_integral(value)?),
        DestKind::U8 => IntegralValue::U8(cast_integral(value)?),
        DestKind::U16 => IntegralValue::U16(cast_integral(value)?),
        DestKind::U32 => IntegralValue::U32(cast_integral(value)?),
        DestKind::U64 => IntegralValue::U64(cast_integral(value)?),
        DestKind::F32 | DestKind::F64 => return Err(FailureKind::TypeMismatch),
    })
}

fn finite(value: FloatingValue) -> Result<NumericValue, FailureKind> {
    let wide = value.as_f64();
    if wide.is_finite() {
        Ok(NumericValue::Floating(value))
    } else {
        Err(FailureKind::OutOfRange)
    }
}
