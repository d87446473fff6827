use std::collections::BTreeMap;

use declit::{LiteralError, NumericValue};
use tracing::trace;

use crate::coerce::{bind, CoercionMode};
use crate::descriptor::{Descriptor, DestKind, Shape};
use crate::error::BindError;
use crate::parsed::{KeyPath, Parsed};

/// A destination type with a statically-declared shape. `shape` builds
/// the descriptor registry once per type; `bind_node` walks one parsed
/// node into a value of that type.
pub trait Bindable: Sized {
    fn shape() -> Shape;

    fn bind_node(
        node: &Parsed,
        path: &mut KeyPath,
        mode: CoercionMode,
    ) -> Result<Self, BindError>;
}

/// Decodes a whole parsed document into `T`. The first leaf failure
/// aborts the call; the caller decides what to do with any partially
/// built storage (this layer returns none of it on error).
#[tracing::instrument(skip(doc))]
pub fn decode<T: Bindable>(doc: &Parsed, mode: CoercionMode) -> Result<T, BindError> {
    let mut path = KeyPath::default();
    let result = T::bind_node(doc, &mut path, mode);
    if let Err(err) = &result {
        tracing::debug!(%err, "decode aborted");
    }
    result
}

/// Yields a table's entries with direct (non-table) entries first and
/// nested sub-tables after, each group in declaration order.
pub fn record_order(
    entries: &[(String, Parsed)],
) -> impl Iterator<Item = &(String, Parsed)> {
    let direct = entries
        .iter()
        .filter(|(_, node)| !matches!(node, Parsed::Table(_)));
    let nested = entries
        .iter()
        .filter(|(_, node)| matches!(node, Parsed::Table(_)));
    direct.chain(nested)
}

fn bind_scalar_as<T>(
    node: &Parsed,
    destination: Descriptor,
    path: &mut KeyPath,
    mode: CoercionMode,
) -> Result<T, BindError>
where
    T: TryFrom<NumericValue, Error = LiteralError>,
{
    let literal = match node {
        Parsed::Scalar(literal) => literal,
        other => return Err(BindError::shape_mismatch(path, "literal", other)),
    };
    let bound = bind(literal, destination, mode)
        .and_then(|value| T::try_from(value).map_err(Into::into))
        .map_err(|failure| BindError::Coercion {
            path: path.to_string(),
            literal: literal.to_string(),
            target: destination.kind,
            kind: failure,
        })?;
    trace!(path = %path, dest = %destination.kind, "bound scalar");
    Ok(bound)
}

macro_rules! define_scalar_bindable {
    ($ty:ident, $kind:ident) => {
        impl Bindable for $ty {
            fn shape() -> Shape {
                Shape::Scalar(Descriptor::new(DestKind::$kind))
            }

            fn bind_node(
                node: &Parsed,
                path: &mut KeyPath,
                mode: CoercionMode,
            ) -> Result<Self, BindError> {
                bind_scalar_as(node, Descriptor::new(DestKind::$kind), path, mode)
            }
        }
    };
}

define_scalar_bindable!(i8, I8);
define_scalar_bindable!(i16, I16);
define_scalar_bindable!(i32, I32);
define_scalar_bindable!(i64, I64);
define_scalar_bindable!(u8, U8);
define_scalar_bindable!(u16, U16);
define_scalar_bindable!(u32, U32);
define_scalar_bindable!(u64, U64);
define_scalar_bindable!(f32, F32);
define_scalar_bindable!(f64, F64);

/// Present-value wrapper: a successful bind allocates `Some`. Absence
/// of a literal is the upstream layer's concern and never reaches this
/// impl.
impl<T: Bindable> Bindable for Option<T> {
    fn shape() -> Shape {
        match T::shape() {
            Shape::Scalar(descriptor) => Shape::Scalar(Descriptor {
                optional: true,
                ..descriptor
            }),
            aggregate => aggregate,
        }
    }

    fn bind_node(
        node: &Parsed,
        path: &mut KeyPath,
        mode: CoercionMode,
    ) -> Result<Self, BindError> {
        T::bind_node(node, path, mode).map(Some)
    }
}

/// Owned allocate-on-bind slot; ownership transfers into the parent.
impl<T: Bindable> Bindable for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn bind_node(
        node: &Parsed,
        path: &mut KeyPath,
        mode: CoercionMode,
    ) -> Result<Self, BindError> {
        T::bind_node(node, path, mode).map(Box::new)
    }
}

impl<T: Bindable> Bindable for Vec<T> {
    fn shape() -> Shape {
        Shape::Seq(Box::new(T::shape()))
    }

    fn bind_node(
        node: &Parsed,
        path: &mut KeyPath,
        mode: CoercionMode,
    ) -> Result<Self, BindError> {
        let items = match node {
            Parsed::Array(items) => items,
            other => return Err(BindError::shape_mismatch(path, "array", other)),
        };
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            path.push_index(index);
            let bound = T::bind_node(item, path, mode);
            path.pop();
            out.push(bound?);
        }
        Ok(out)
    }
}

/// Key-ordered mapping with one declared value kind; one slot is
/// allocated per key on first encounter, in source order.
impl<T: Bindable> Bindable for BTreeMap<String, T> {
    fn shape() -> Shape {
        Shape::Map(Box::new(T::shape()))
    }

    fn bind_node(
        node: &Parsed,
        path: &mut KeyPath,
        mode: CoercionMode,
    ) -> Result<Self, BindError> {
        let entries = match node {
            Parsed::Table(entries) => entries,
            other => return Err(BindError::shape_mismatch(path, "table", other)),
        };
        let mut out = BTreeMap::new();
        for (key, child) in entries {
            path.push_key(key);
            let bound = T::bind_node(child, path, mode);
            path.pop();
            out.insert(key.clone(), bound?);
        }
        Ok(out)
    }
}

/// Declares a record destination: generates the `Bindable` impl for a
/// named-field struct, mapping source keys to fields. Unknown keys are
/// skipped (the upstream reflection layer reports them); fields absent
/// from the input keep their `Default` value.
#[macro_export]
macro_rules! bind_record {
    ($name:ident { $($key:literal => $field:ident : $ty:ty),+ $(,)? }) => {
        impl $crate::Bindable for $name {
            fn shape() -> $crate::Shape {
                $crate::Shape::Record(vec![
                    $(
                        $crate::FieldShape {
                            key: $key.to_string(),
                            shape: <$ty as $crate::Bindable>::shape(),
                        },
                    )+
                ])
            }

            fn bind_node(
                node: &$crate::Parsed,
                path: &mut $crate::KeyPath,
                mode: $crate::CoercionMode,
            ) -> Result<Self, $crate::BindError> {
                let entries = node
                    .table_entries()
                    .ok_or_else(|| $crate::BindError::shape_mismatch(path, "table", node))?;
                let mut out = <$name as ::core::default::Default>::default();
                for (key, child) in $crate::record_order(entries) {
                    match key.as_str() {
                        $(
                            $key => {
                                path.push_key(key);
                                let bound = <$ty as $crate::Bindable>::bind_node(child, path, mode);
                                path.pop();
                                out.$field = bound?;
                            }
                        )+
                        _ => {}
                    }
                }
                Ok(out)
            }
        }
    };
}
