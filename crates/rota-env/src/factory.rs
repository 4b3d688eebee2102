//! Builds the observation and action spaces of the staffing problem.
//!
//! Purely structural: every function returns a deterministic
//! description and touches no state. You may mix different attribute
//! blocks together for your own domain, but watch the dimensionality —
//! wide per-staff tuples multiply quickly with the staff capacity.

use indexmap::IndexMap;
use rota_spaces::{BoxSpace, Discrete, Space};

/// Length of the wide position attribute (an encoded vacancy vector).
pub const POSITION_WIDE_ATTRIBUTE_LEN: usize = 92;

/// Length of the wide per-staff attribute (an encoded skill vector).
pub const STAFF_WIDE_ATTRIBUTE_LEN: usize = 4;

/// Number of attributes in a position record.
pub const POSITION_ATTRIBUTE_COUNT: usize = 6;

/// Number of attributes in a per-staff record.
pub const STAFF_ATTRIBUTE_COUNT: usize = 6;

/// Observation space for the position attributes: five scalar unit
/// boxes plus one [`POSITION_WIDE_ATTRIBUTE_LEN`]-vector, all bounded
/// to `[0, 1]`.
pub fn position_details() -> Space {
    let mut attributes: Vec<Space> = (0..POSITION_ATTRIBUTE_COUNT - 1)
        .map(|_| Space::Box(BoxSpace::unit()))
        .collect();
    attributes.push(Space::Box(BoxSpace::unit_vector(POSITION_WIDE_ATTRIBUTE_LEN)));
    Space::Tuple(attributes)
}

/// Observation space for one staff member's details: five scalar unit
/// boxes plus one [`STAFF_WIDE_ATTRIBUTE_LEN`]-vector.
pub fn staff_member_details() -> Space {
    let mut attributes: Vec<Space> = (0..STAFF_ATTRIBUTE_COUNT - 1)
        .map(|_| Space::Box(BoxSpace::unit()))
        .collect();
    attributes.push(Space::Box(BoxSpace::unit_vector(STAFF_WIDE_ATTRIBUTE_LEN)));
    Space::Tuple(attributes)
}

/// Observation space for the whole staff pool: a fixed-length sequence
/// of [`staff_member_details()`] records, one per eligible staff slot.
pub fn staff_details(max_staff_limit: u32) -> Space {
    Space::Tuple(
        (0..max_staff_limit)
            .map(|_| staff_member_details())
            .collect(),
    )
}

/// Per-step legality mask over the discrete actions: one `[0, 1]`
/// entry per eligible staff slot.
pub fn action_mask(capacity: u32) -> Space {
    Space::Box(BoxSpace::unit_vector(capacity as usize))
}

/// The full per-agent observation record:
/// `{ "observation": { "position_details", "staff_details" }, "action_mask" }`.
pub fn observation_space(capacity: u32) -> Space {
    let observation = Space::Dict(IndexMap::from([
        ("position_details".to_string(), position_details()),
        ("staff_details".to_string(), staff_details(capacity)),
    ]));
    Space::Dict(IndexMap::from([
        ("observation".to_string(), observation),
        ("action_mask".to_string(), action_mask(capacity)),
    ]))
}

/// The action space: a single discrete choice in `[0, capacity)`,
/// indexing the eligible staff slot to move.
pub fn action_space(capacity: u32) -> Space {
    Space::Discrete(Discrete { n: capacity })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_spaces::compliance;

    #[test]
    fn position_details_shape() {
        let Space::Tuple(attributes) = position_details() else {
            panic!("position details must be a tuple");
        };
        assert_eq!(attributes.len(), POSITION_ATTRIBUTE_COUNT);
        let Space::Box(wide) = &attributes[POSITION_ATTRIBUTE_COUNT - 1] else {
            panic!("last position attribute must be a box");
        };
        assert_eq!(wide.flat_len(), POSITION_WIDE_ATTRIBUTE_LEN);
    }

    #[test]
    fn staff_details_one_record_per_slot() {
        let Space::Tuple(records) = staff_details(10) else {
            panic!("staff details must be a tuple");
        };
        assert_eq!(records.len(), 10);
        for record in &records {
            let Space::Tuple(attributes) = record else {
                panic!("each staff record must be a tuple");
            };
            assert_eq!(attributes.len(), STAFF_ATTRIBUTE_COUNT);
        }
    }

    #[test]
    fn observation_space_keys_and_bounds() {
        let space = observation_space(4);
        let Space::Dict(entries) = &space else {
            panic!("observation space must be a dict");
        };
        assert_eq!(
            entries.keys().collect::<Vec<_>>(),
            ["observation", "action_mask"]
        );
        let Space::Dict(inner) = &entries["observation"] else {
            panic!("inner observation must be a dict");
        };
        assert_eq!(
            inner.keys().collect::<Vec<_>>(),
            ["position_details", "staff_details"]
        );
        compliance::assert_samples_contained(&space, 16);
        compliance::assert_flat_len_consistent(&space);
    }

    #[test]
    fn action_space_cardinality() {
        let Space::Discrete(d) = action_space(100) else {
            panic!("action space must be discrete");
        };
        assert_eq!(d.n, 100);
    }

    #[test]
    fn action_mask_length_tracks_capacity() {
        let Space::Box(mask) = action_mask(7) else {
            panic!("action mask must be a box");
        };
        assert_eq!(mask.flat_len(), 7);
        assert_eq!(mask.low, 0.0);
        assert_eq!(mask.high, 1.0);
    }
}
