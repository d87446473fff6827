mod error;
mod exact;
mod helper_impl;
mod literal;
mod macros;
mod value;

pub use error::LiteralError;
pub use exact::cast_integral;
pub use literal::{FloatLiteral, IntegerLiteral, Literal, Radix, Sign};
pub use value::{FloatingValue, IntegralValue, NumericValue};
