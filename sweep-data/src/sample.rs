#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One angle/distance measurement reported by the rangefinder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Scan angle in integer degrees, nominally in `[0, 360)`.
    pub angle: i64,
    /// Distance to an object in device units (mm on common firmware).
    pub distance: i64,
}

impl Sample {
    pub fn new(angle: i64, distance: i64) -> Sample {
        Sample { angle, distance }
    }
}
