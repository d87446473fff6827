use std::fmt;

use serde::{Deserialize, Serialize};

/// The numeric type a leaf value is bound into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl DestKind {
    pub fn bit_len(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 => 16,
            Self::I32 | Self::U32 | Self::F32 => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
        }
    }

    pub fn is_integral(self) -> bool {
        !matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::F32 | Self::F64
        )
    }
}

impl fmt::Display for DestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// What a scalar binding target accepts. `optional` marks a
/// present-value slot that is allocated on a successful bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub kind: DestKind,
    pub optional: bool,
}

impl Descriptor {
    pub fn new(kind: DestKind) -> Self {
        Self {
            kind,
            optional: false,
        }
    }

    pub fn optional(kind: DestKind) -> Self {
        Self {
            kind,
            optional: true,
        }
    }
}

/// Statically-declared shape of a destination type, built once per type
/// ahead of decoding and never inspected reflectively per value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Scalar(Descriptor),
    Record(Vec<FieldShape>),
    Map(Box<Shape>),
    Seq(Box<Shape>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldShape {
    pub key: String,
    pub shape: Shape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_geometry() {
        assert_eq!(DestKind::U8.bit_len(), 8);
        assert_eq!(DestKind::F64.bit_len(), 64);
        assert!(DestKind::I64.is_integral());
        assert!(!DestKind::F32.is_integral());
        assert!(DestKind::I8.is_signed());
        assert!(!DestKind::U64.is_signed());
        assert_eq!(DestKind::U32.to_string(), "u32");
    }
}
