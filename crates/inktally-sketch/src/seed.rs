//! Stable per-stroke seed derivation.
//!
//! Each mark's wobble must not depend on what was drawn before it, only on
//! which mark it is. Hashing the story seed together with the mark's side
//! label and ordinal gives every stroke its own stable RNG seed, so a mark
//! removed on reverse scroll and re-added later looks exactly the same.

/// Derive the RNG seed for one stroke.
///
/// `label` identifies the display group (e.g. a side name or `"timeline"`),
/// `index` the stroke's position within it.
pub fn stroke_seed(story_seed: u64, label: &str, index: u32) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&story_seed.to_le_bytes());
    hasher.update(label.as_bytes());
    hasher.update(&index.to_le_bytes());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_seed() {
        assert_eq!(stroke_seed(42, "a", 3), stroke_seed(42, "a", 3));
    }

    #[test]
    fn distinct_inputs_distinct_seeds() {
        let base = stroke_seed(42, "a", 3);
        assert_ne!(base, stroke_seed(42, "a", 4));
        assert_ne!(base, stroke_seed(42, "b", 3));
        assert_ne!(base, stroke_seed(43, "a", 3));
    }

    #[test]
    fn label_and_index_do_not_collide_trivially() {
        // "a" with index 0x31 must differ from "a1" with index 0 even though
        // the raw byte streams could be confused without the fixed-width
        // index encoding.
        assert_ne!(stroke_seed(0, "a", 0x31), stroke_seed(0, "a1", 0));
    }
}
