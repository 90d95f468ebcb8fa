//! Split/merge decisions with a dead band around each distance threshold.

/// Half-width of the dead band, as a fraction of the threshold.
pub const HYSTERESIS_FRACTION: f64 = 0.1;

/// Result of evaluating a patch against its threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LodAction {
    /// Keep the current representation.
    Keep,
    /// Replace the patch with its four children (increase detail).
    Split,
    /// Replace the children with the patch itself (decrease detail).
    Merge,
}

/// The closed band `[T - 0.1T, T + 0.1T]` around a threshold `T`.
///
/// A leaf splits only once the viewer is strictly inside the lower edge and a
/// detailed patch merges only once the viewer is strictly beyond the upper
/// edge, so a viewer hovering near `T` never makes a patch flicker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HysteresisBand {
    threshold: f64,
    offset: f64,
}

impl HysteresisBand {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            offset: threshold * HYSTERESIS_FRACTION,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Distance below which a leaf splits.
    pub fn lower(&self) -> f64 {
        self.threshold - self.offset
    }

    /// Distance above which a detailed patch merges.
    pub fn upper(&self) -> f64 {
        self.threshold + self.offset
    }

    /// Decide what a patch at `distance` should do given whether its children
    /// are currently the visible representation.
    pub fn decide(&self, detailed: bool, distance: f64) -> LodAction {
        if !detailed && distance < self.lower() {
            LodAction::Split
        } else if detailed && distance > self.upper() {
            LodAction::Merge
        } else {
            LodAction::Keep
        }
    }
}
