macro_rules! define_casting_integral {
    ($ty:ident, $variant:ident) => {
        impl TryFrom<$crate::IntegralValue> for $ty {
            type Error = $crate::LiteralError;

            fn try_from(value: $crate::IntegralValue) -> Result<Self, Self::Error> {
                value
                    .as_i128()
                    .try_into()
                    .map_err(|_| $crate::LiteralError::OutOfRange)
            }
        }

        impl TryFrom<$crate::NumericValue> for $ty {
            type Error = $crate::LiteralError;

            fn try_from(value: $crate::NumericValue) -> Result<Self, Self::Error> {
                $crate::IntegralValue::try_from(value)?.try_into()
            }
        }

        impl From<$ty> for $crate::IntegralValue {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

pub(crate) use define_casting_integral;
