use std::fmt;

/// A bound integer value, tagged with the width and signedness it was
/// bound to. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegralValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl IntegralValue {
    /// Widens into `i128`, which holds every representable value.
    pub fn as_i128(self) -> i128 {
        match self {
            Self::I8(v) => v.into(),
            Self::I16(v) => v.into(),
            Self::I32(v) => v.into(),
            Self::I64(v) => v.into(),
            Self::U8(v) => v.into(),
            Self::U16(v) => v.into(),
            Self::U32(v) => v.into(),
            Self::U64(v) => v.into(),
        }
    }
}

impl fmt::Display for IntegralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i128())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatingValue {
    F32(f32),
    F64(f64),
}

impl FloatingValue {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::F32(v) => v.into(),
            Self::F64(v) => v,
        }
    }
}

impl fmt::Display for FloatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
        }
    }
}

/// The result of a successful coercion: either family, concrete width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Integral(IntegralValue),
    Floating(FloatingValue),
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integral(v) => v.fmt(f),
            Self::Floating(v) => v.fmt(f),
        }
    }
}
