//! Planet-level entry point: six patch quadtrees, one per cube face.

mod face_generator;

pub use face_generator::{FaceGenerator, FaceGeneratorConfig, TreeStats};
