//! Level-of-detail patch trees: the per-patch split/merge state machine, hysteresis, horizon test and renderer seam.

mod horizon;
mod hysteresis;
mod patch;
mod recording;
mod sink;

pub use horizon::{hemisphere_alignment, is_far_hemisphere, spans_full_face};
pub use hysteresis::{HYSTERESIS_FRACTION, HysteresisBand, LodAction};
pub use patch::{FaceContext, Patch};
pub use recording::{PatchRecord, RecordingHandle, RecordingSink, SceneState};
pub use sink::{GeometrySink, PatchGeometry, PatchHandle};
