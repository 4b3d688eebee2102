//! Sampled values mirroring the [`Space`](crate::Space) descriptor tree.

use indexmap::IndexMap;

/// A concrete value drawn from (or checked against) a space.
///
/// The variant structure mirrors [`Space`](crate::Space) exactly: a
/// scalar box samples to [`Value::Scalar`], a shaped box to a flat
/// [`Value::Vector`], a discrete choice to [`Value::Index`], and the
/// composite descriptors to their composite counterparts.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A single bounded float (scalar box).
    Scalar(f32),
    /// A flat vector of bounded floats (shaped box, row-major).
    Vector(Vec<f32>),
    /// A discrete choice index.
    Index(u32),
    /// An ordered sequence of sub-values.
    Tuple(Vec<Value>),
    /// Named sub-values in declaration order.
    Dict(IndexMap<String, Value>),
}

impl Value {
    /// Total number of scalar entries in this value.
    pub fn flat_len(&self) -> usize {
        match self {
            Self::Scalar(_) | Self::Index(_) => 1,
            Self::Vector(v) => v.len(),
            Self::Tuple(items) => items.iter().map(Value::flat_len).sum(),
            Self::Dict(entries) => entries.values().map(Value::flat_len).sum(),
        }
    }

    /// Borrow the dict entries if this value is a [`Value::Dict`].
    pub fn as_dict(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Borrow the tuple items if this value is a [`Value::Tuple`].
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// The choice index if this value is a [`Value::Index`].
    pub fn as_index(&self) -> Option<u32> {
        match self {
            Self::Index(i) => Some(*i),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_len_counts_nested_scalars() {
        let v = Value::Dict(IndexMap::from([
            (
                "a".to_string(),
                Value::Tuple(vec![Value::Scalar(0.5), Value::Vector(vec![0.0; 4])]),
            ),
            ("b".to_string(), Value::Index(3)),
        ]));
        assert_eq!(v.flat_len(), 6);
    }

    #[test]
    fn accessors_match_variants() {
        let v = Value::Tuple(vec![Value::Index(2)]);
        assert!(v.as_dict().is_none());
        let items = v.as_tuple().unwrap();
        assert_eq!(items[0].as_index(), Some(2));
    }
}
