//! A headless [`GeometrySink`] that records patches and visibility changes.
//!
//! Useful wherever patch trees run without a GPU: tests, tooling and the demo
//! binary. All handles share one [`SceneState`], so moving the camera on the
//! sink is observed by every patch on its next update.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use geogen_cubesphere::CubeFace;
use glam::DVec3;

use crate::{GeometrySink, PatchGeometry, PatchHandle};

/// What the sink remembers about one registered patch.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchRecord {
    pub face: CubeFace,
    pub depth: usize,
    /// Patch center relative to the planet center.
    pub center: DVec3,
    pub vertex_count: usize,
    pub index_count: usize,
    pub visible: bool,
}

/// Shared state behind a [`RecordingSink`] and its handles.
#[derive(Clone, Debug, Default)]
pub struct SceneState {
    pub camera: DVec3,
    pub planet_center: DVec3,
    /// Registered patches, indexed by registration order.
    pub patches: Vec<PatchRecord>,
    /// Every `set_visible` call as `(patch id, visible)`, in call order.
    pub visibility_log: Vec<(usize, bool)>,
}

impl SceneState {
    /// Number of patches whose mesh is currently shown.
    pub fn visible_count(&self) -> usize {
        self.patches.iter().filter(|p| p.visible).count()
    }
}

/// Records registrations and exposes a movable camera and planet center.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    scene: Rc<RefCell<SceneState>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_camera(&self, camera: DVec3) {
        self.scene.borrow_mut().camera = camera;
    }

    pub fn set_planet_center(&self, center: DVec3) {
        self.scene.borrow_mut().planet_center = center;
    }

    /// Read access to the recorded scene.
    ///
    /// The returned guard must be dropped before the next update.
    pub fn scene(&self) -> Ref<'_, SceneState> {
        self.scene.borrow()
    }

    /// Drain the visibility log recorded since the last call.
    pub fn take_visibility_log(&self) -> Vec<(usize, bool)> {
        std::mem::take(&mut self.scene.borrow_mut().visibility_log)
    }
}

impl GeometrySink for RecordingSink {
    type Handle = RecordingHandle;

    fn register(&mut self, geometry: &PatchGeometry<'_>) -> RecordingHandle {
        let mut scene = self.scene.borrow_mut();
        let id = scene.patches.len();
        scene.patches.push(PatchRecord {
            face: geometry.face,
            depth: geometry.depth,
            center: geometry.center,
            vertex_count: geometry.mesh.len(),
            index_count: geometry.indices.indices().len(),
            visible: true,
        });
        RecordingHandle {
            id,
            center: geometry.center,
            scene: Rc::clone(&self.scene),
        }
    }
}

/// Handle for one patch registered with a [`RecordingSink`].
#[derive(Debug)]
pub struct RecordingHandle {
    id: usize,
    center: DVec3,
    scene: Rc<RefCell<SceneState>>,
}

impl RecordingHandle {
    /// Registration order of this patch.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl PatchHandle for RecordingHandle {
    fn chunk_position(&self) -> DVec3 {
        self.scene.borrow().planet_center + self.center
    }

    fn camera_position(&self) -> DVec3 {
        self.scene.borrow().camera
    }

    fn planet_center(&self) -> DVec3 {
        self.scene.borrow().planet_center
    }

    fn set_visible(&mut self, visible: bool) {
        let mut scene = self.scene.borrow_mut();
        scene.patches[self.id].visible = visible;
        scene.visibility_log.push((self.id, visible));
    }
}
