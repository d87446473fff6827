use crate::error::LiteralError;
use crate::macros::define_casting_integral;
use crate::value::{FloatingValue, IntegralValue, NumericValue};

define_casting_integral!(i8, I8);
define_casting_integral!(i16, I16);
define_casting_integral!(i32, I32);
define_casting_integral!(i64, I64);
define_casting_integral!(u8, U8);
define_casting_integral!(u16, U16);
define_casting_integral!(u32, U32);
define_casting_integral!(u64, U64);

impl TryFrom<NumericValue> for IntegralValue {
    type Error = LiteralError;

    fn try_from(value: NumericValue) -> Result<Self, Self::Error> {
        match value {
            NumericValue::Integral(i) => Ok(i),
            NumericValue::Floating(_) => Err(LiteralError::KindMismatch),
        }
    }
}

impl TryFrom<NumericValue> for FloatingValue {
    type Error = LiteralError;

    fn try_from(value: NumericValue) -> Result<Self, Self::Error> {
        match value {
            NumericValue::Floating(f) => Ok(f),
            NumericValue::Integral(_) => Err(LiteralError::KindMismatch),
        }
    }
}

impl From<f32> for FloatingValue {
    fn from(f: f32) -> Self {
        Self::F32(f)
    }
}

impl From<f64> for FloatingValue {
    fn from(f: f64) -> Self {
        Self::F64(f)
    }
}

impl TryFrom<FloatingValue> for f32 {
    type Error = LiteralError;

    fn try_from(value: FloatingValue) -> Result<Self, Self::Error> {
        match value {
            FloatingValue::F32(f) => Ok(f),
            FloatingValue::F64(d) => {
                let f = d as f32;
                if f.is_finite() || d.is_infinite() {
                    Ok(f)
                } else {
                    Err(LiteralError::OutOfRange)
                }
            }
        }
    }
}

impl TryFrom<FloatingValue> for f64 {
    type Error = LiteralError;

    fn try_from(value: FloatingValue) -> Result<Self, Self::Error> {
        match value {
            FloatingValue::F32(f) => Ok(f.into()),
            FloatingValue::F64(d) => Ok(d),
        }
    }
}

impl TryFrom<NumericValue> for f32 {
    type Error = LiteralError;

    fn try_from(value: NumericValue) -> Result<Self, Self::Error> {
        FloatingValue::try_from(value)?.try_into()
    }
}

impl TryFrom<NumericValue> for f64 {
    type Error = LiteralError;

    fn try_from(value: NumericValue) -> Result<Self, Self::Error> {
        FloatingValue::try_from(value)?.try_into()
    }
}

impl From<IntegralValue> for NumericValue {
    fn from(i: IntegralValue) -> Self {
        Self::Integral(i)
    }
}

impl From<FloatingValue> for NumericValue {
    fn from(f: FloatingValue) -> Self {
        Self::Floating(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_extraction_checks_width() {
        let value = NumericValue::Integral(IntegralValue::I64(300));
        assert_eq!(i64::try_from(value).unwrap(), 300);
        assert_eq!(u16::try_from(value).unwrap(), 300);
        assert_eq!(i8::try_from(value), Err(LiteralError::OutOfRange));
        let negative = NumericValue::Integral(IntegralValue::I32(-1));
        assert_eq!(u32::try_from(negative), Err(LiteralError::OutOfRange));
    }

    #[test]
    fn cross_kind_extraction_is_a_kind_mismatch() {
        let value = NumericValue::Floating(FloatingValue::F64(1.0));
        assert_eq!(i64::try_from(value), Err(LiteralError::KindMismatch));
        let value = NumericValue::Integral(IntegralValue::U8(1));
        assert_eq!(f64::try_from(value), Err(LiteralError::KindMismatch));
    }

    #[test]
    fn float_narrowing_keeps_finite_values() {
        let wide = FloatingValue::F64(1.5);
        assert_eq!(f32::try_from(wide).unwrap(), 1.5f32);
        let overflow = FloatingValue::F64(f64::MAX);
        assert_eq!(f32::try_from(overflow), Err(LiteralError::OutOfRange));
    }
}
