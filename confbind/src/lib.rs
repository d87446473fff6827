mod binder;
mod coerce;
mod descriptor;
mod error;
mod parsed;

pub use binder::{decode, record_order, Bindable};
pub use coerce::{bind, CoercionMode};
pub use descriptor::{DestKind, Descriptor, FieldShape, Shape};
pub use error::{BindError, FailureKind};
pub use parsed::{KeyPath, Parsed, Segment};
