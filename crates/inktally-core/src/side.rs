//! The two competing sides of a story.

use serde::{Deserialize, Serialize};

/// One of the two competing tallies.
///
/// Stories refer to sides by their lowercase serialized names (`"a"` and
/// `"b"`). There are exactly two; the closed enum is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Both sides, in display order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The opposing side.
    pub fn rival(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Side::A => "a",
            Side::B => "b",
        }
    }
}
