//! The [`Space`] descriptor tree and its concrete leaf types.

use crate::error::SpaceError;
use crate::value::Value;
use indexmap::IndexMap;
use rand::Rng;
use rand::RngExt;
use smallvec::SmallVec;

/// Shape of a box: one entry per axis, empty for a scalar.
///
/// Two inline axes cover every shape used by the staffing templates;
/// higher-rank boxes spill to the heap transparently.
pub type Shape = SmallVec<[usize; 2]>;

// ── BoxSpace ─────────────────────────────────────────────────────

/// A bounded block of continuous values.
///
/// All entries share a single `[low, high]` interval. An empty shape
/// describes a scalar; a non-empty shape describes a row-major block
/// with `shape.iter().product()` entries.
///
/// # Examples
///
/// ```
/// use rota_spaces::BoxSpace;
///
/// let unit = BoxSpace::unit();
/// assert_eq!(unit.flat_len(), 1);
///
/// let mask = BoxSpace::unit_vector(92);
/// assert_eq!(mask.flat_len(), 92);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    /// Inclusive lower bound for every entry.
    pub low: f32,
    /// Inclusive upper bound for every entry.
    pub high: f32,
    /// Axis lengths; empty for a scalar.
    pub shape: Shape,
}

impl BoxSpace {
    /// Create a scalar box over `[low, high]`.
    ///
    /// Returns `Err(SpaceError::BoundsNotFinite)` if either bound is
    /// NaN or infinite, or `Err(SpaceError::LowAboveHigh)` if
    /// `low > high`.
    pub fn new(low: f32, high: f32) -> Result<Self, SpaceError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(SpaceError::BoundsNotFinite { low, high });
        }
        if low > high {
            return Err(SpaceError::LowAboveHigh { low, high });
        }
        Ok(Self {
            low,
            high,
            shape: Shape::new(),
        })
    }

    /// Reshape this box to the given axis lengths.
    ///
    /// Returns `Err(SpaceError::ZeroAxis)` if any axis has length zero.
    pub fn with_shape(mut self, shape: impl IntoIterator<Item = usize>) -> Result<Self, SpaceError> {
        let shape: Shape = shape.into_iter().collect();
        if shape.iter().any(|&axis| axis == 0) {
            return Err(SpaceError::ZeroAxis);
        }
        self.shape = shape;
        Ok(self)
    }

    /// A scalar box over the unit interval `[0, 1]`.
    pub fn unit() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
            shape: Shape::new(),
        }
    }

    /// A length-`len` vector box over the unit interval `[0, 1]`.
    pub fn unit_vector(len: usize) -> Self {
        Self {
            low: 0.0,
            high: 1.0,
            shape: SmallVec::from_slice(&[len]),
        }
    }

    /// Total number of scalar entries (1 for a scalar box).
    pub fn flat_len(&self) -> usize {
        self.shape.iter().product()
    }

    fn sample_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        // Rounding can push the product an ulp past `high`; samples
        // must stay inside the closed interval.
        (self.low + rng.random::<f32>() * (self.high - self.low)).min(self.high)
    }

    fn entry_in_bounds(&self, v: f32) -> bool {
        v >= self.low && v <= self.high
    }
}

// ── Discrete ─────────────────────────────────────────────────────

/// A single discrete choice in `[0, n)`.
///
/// # Examples
///
/// ```
/// use rota_spaces::Discrete;
///
/// let d = Discrete::new(100).unwrap();
/// assert_eq!(d.n, 100);
/// assert!(Discrete::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discrete {
    /// Number of choices.
    pub n: u32,
}

impl Discrete {
    /// Create a discrete space with `n` choices.
    ///
    /// Returns `Err(SpaceError::ZeroCardinality)` if `n == 0`.
    pub fn new(n: u32) -> Result<Self, SpaceError> {
        if n == 0 {
            return Err(SpaceError::ZeroCardinality);
        }
        Ok(Self { n })
    }
}

// ── Space ────────────────────────────────────────────────────────

/// A declarative description of an observation or action structure.
///
/// Spaces are deterministic, side-effect-free descriptors: they hold
/// no state and no RNG. [`sample()`](Space::sample) draws through a
/// caller-owned RNG, so identical RNG streams yield identical values.
///
/// # Examples
///
/// ```
/// use rota_spaces::{BoxSpace, Discrete, Space, Value};
/// use rand::SeedableRng;
///
/// let space = Space::Tuple(vec![
///     Space::Box(BoxSpace::unit()),
///     Space::Discrete(Discrete::new(4).unwrap()),
/// ]);
/// assert_eq!(space.flat_len(), 2);
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
/// let value = space.sample(&mut rng);
/// assert!(space.contains(&value));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Space {
    /// A bounded continuous block.
    Box(BoxSpace),
    /// A discrete choice.
    Discrete(Discrete),
    /// An ordered sequence of sub-spaces.
    Tuple(Vec<Space>),
    /// Named sub-spaces in declaration order.
    Dict(IndexMap<String, Space>),
}

impl Space {
    /// Draw a uniform sample within the declared bounds.
    ///
    /// The structure of the returned [`Value`] matches this descriptor
    /// exactly, so `space.contains(&space.sample(rng))` always holds.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        match self {
            Self::Box(b) if b.shape.is_empty() => Value::Scalar(b.sample_entry(rng)),
            Self::Box(b) => {
                let data = (0..b.flat_len()).map(|_| b.sample_entry(rng)).collect();
                Value::Vector(data)
            }
            Self::Discrete(d) => Value::Index(rng.random_range(0..d.n)),
            Self::Tuple(items) => Value::Tuple(items.iter().map(|s| s.sample(rng)).collect()),
            Self::Dict(entries) => Value::Dict(
                entries
                    .iter()
                    .map(|(key, s)| (key.clone(), s.sample(rng)))
                    .collect(),
            ),
        }
    }

    /// Whether `value` structurally matches this descriptor and every
    /// scalar entry lies within the declared bounds.
    pub fn contains(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Box(b), Value::Scalar(v)) => b.shape.is_empty() && b.entry_in_bounds(*v),
            (Self::Box(b), Value::Vector(data)) => {
                !b.shape.is_empty()
                    && data.len() == b.flat_len()
                    && data.iter().all(|&v| b.entry_in_bounds(v))
            }
            (Self::Discrete(d), Value::Index(i)) => *i < d.n,
            (Self::Tuple(spaces), Value::Tuple(items)) => {
                spaces.len() == items.len()
                    && spaces.iter().zip(items).all(|(s, v)| s.contains(v))
            }
            (Self::Dict(spaces), Value::Dict(entries)) => {
                spaces.len() == entries.len()
                    && spaces.iter().all(|(key, s)| {
                        entries.get(key).is_some_and(|v| s.contains(v))
                    })
            }
            _ => false,
        }
    }

    /// Total number of scalar entries described by this space.
    pub fn flat_len(&self) -> usize {
        match self {
            Self::Box(b) => b.flat_len(),
            Self::Discrete(_) => 1,
            Self::Tuple(items) => items.iter().map(Space::flat_len).sum(),
            Self::Dict(entries) => entries.values().map(Space::flat_len).sum(),
        }
    }
}

impl From<BoxSpace> for Space {
    fn from(b: BoxSpace) -> Self {
        Space::Box(b)
    }
}

impl From<Discrete> for Space {
    fn from(d: Discrete) -> Self {
        Space::Discrete(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn nested_space() -> Space {
        Space::Dict(IndexMap::from([
            (
                "block".to_string(),
                Space::Tuple(vec![
                    Space::Box(BoxSpace::unit()),
                    Space::Box(BoxSpace::unit_vector(3)),
                ]),
            ),
            (
                "choice".to_string(),
                Space::Discrete(Discrete::new(5).unwrap()),
            ),
        ]))
    }

    #[test]
    fn box_rejects_inverted_bounds() {
        assert_eq!(
            BoxSpace::new(1.0, 0.0),
            Err(SpaceError::LowAboveHigh { low: 1.0, high: 0.0 })
        );
    }

    #[test]
    fn box_rejects_nan_bounds() {
        assert!(matches!(
            BoxSpace::new(f32::NAN, 1.0),
            Err(SpaceError::BoundsNotFinite { .. })
        ));
    }

    #[test]
    fn box_rejects_zero_axis() {
        let err = BoxSpace::unit().with_shape([4, 0]);
        assert_eq!(err, Err(SpaceError::ZeroAxis));
    }

    #[test]
    fn scalar_box_samples_scalar() {
        let space = Space::Box(BoxSpace::unit());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(space.sample(&mut rng), Value::Scalar(_)));
    }

    #[test]
    fn shaped_box_samples_full_vector() {
        let space = Space::Box(BoxSpace::unit_vector(92));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        match space.sample(&mut rng) {
            Value::Vector(data) => assert_eq!(data.len(), 92),
            other => panic!("expected vector, got {other:?}"),
        }
    }

    #[test]
    fn contains_rejects_structural_mismatch() {
        let space = nested_space();
        assert!(!space.contains(&Value::Scalar(0.5)));
        assert!(!space.contains(&Value::Dict(IndexMap::new())));
    }

    #[test]
    fn contains_rejects_out_of_bounds_entry() {
        let space = Space::Box(BoxSpace::unit_vector(2));
        assert!(!space.contains(&Value::Vector(vec![0.5, 1.5])));
        assert!(space.contains(&Value::Vector(vec![0.5, 1.0])));
    }

    #[test]
    fn contains_rejects_wrong_vector_length() {
        let space = Space::Box(BoxSpace::unit_vector(4));
        assert!(!space.contains(&Value::Vector(vec![0.5; 3])));
    }

    #[test]
    fn discrete_sample_below_cardinality() {
        let space = Space::Discrete(Discrete::new(3).unwrap());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..64 {
            match space.sample(&mut rng) {
                Value::Index(i) => assert!(i < 3),
                other => panic!("expected index, got {other:?}"),
            }
        }
    }

    #[test]
    fn nested_space_compliance() {
        compliance::assert_samples_contained(&nested_space(), 32);
        compliance::assert_flat_len_consistent(&nested_space());
        compliance::assert_sampling_deterministic(&nested_space());
    }

    proptest! {
        #[test]
        fn any_bounds_sample_in_range(low in -100.0f32..100.0, span in 0.0f32..100.0, seed: u64) {
            let b = BoxSpace::new(low, low + span).unwrap();
            let space = Space::Box(b);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let value = space.sample(&mut rng);
            prop_assert!(space.contains(&value));
        }

        #[test]
        fn any_cardinality_sample_in_range(n in 1u32..10_000, seed: u64) {
            let space = Space::Discrete(Discrete::new(n).unwrap());
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            prop_assert!(space.contains(&space.sample(&mut rng)));
        }
    }
}
