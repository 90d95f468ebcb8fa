//! Nearest-neighbour heightmap sampling over a shared byte buffer.
//!
//! A heightmap is a square grid of texels stored in a flat byte buffer that may
//! interleave several channels (e.g. RGBA). Each texel occupies `step` bytes and
//! the height is read from the byte at offset `at` within the texel.

use std::sync::Arc;

use glam::DVec2;

/// Errors raised when a heightmap buffer cannot back its declared layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeightmapError {
    /// A sampled heightmap needs at least one texel.
    #[error("heightmap resolution must be at least 1")]
    ZeroResolution,

    /// The buffer is too short for the declared resolution, stride and channel.
    #[error("heightmap sample out of bounds: last texel reads byte {required}, buffer has {len}")]
    SampleOutOfBounds {
        /// Index of the last byte a sample can read.
        required: usize,
        /// Length of the supplied buffer.
        len: usize,
    },
}

/// A validated byte heightmap.
///
/// Construction guarantees that every texel reachable by [`Self::sample`] lies
/// inside the buffer, so sampling never fails.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledHeightmap {
    resolution: usize,
    data: Arc<[u8]>,
    at: usize,
    step: usize,
}

impl SampledHeightmap {
    /// Wrap `data` as a `resolution × resolution` heightmap.
    ///
    /// - `at`: byte offset of the height channel inside a texel
    /// - `step`: bytes per texel
    pub fn new(
        resolution: u32,
        data: impl Into<Arc<[u8]>>,
        at: usize,
        step: usize,
    ) -> Result<Self, HeightmapError> {
        let data = data.into();
        let resolution = resolution as usize;
        if resolution == 0 {
            return Err(HeightmapError::ZeroResolution);
        }

        let required = (resolution * resolution - 1)
            .checked_mul(step)
            .and_then(|offset| offset.checked_add(at))
            .unwrap_or(usize::MAX);
        if required >= data.len() {
            return Err(HeightmapError::SampleOutOfBounds {
                required,
                len: data.len(),
            });
        }

        Ok(Self {
            resolution,
            data,
            at,
            step,
        })
    }

    /// Texels per side.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// The shared backing buffer.
    pub fn data(&self) -> &Arc<[u8]> {
        &self.data
    }

    /// Raw byte at texture coordinate `uv`, using the nearest texel.
    ///
    /// Coordinates outside `[0, 1]` clamp to the border texels.
    #[inline]
    pub fn sample(&self, uv: DVec2) -> u8 {
        let col = self.texel(uv.x);
        let row = self.texel(uv.y);
        self.data[(row * self.resolution + col) * self.step + self.at]
    }

    #[inline]
    fn texel(&self, t: f64) -> usize {
        let max = self.resolution as i64 - 1;
        ((t * self.resolution as f64).floor() as i64).clamp(0, max) as usize
    }
}

/// Displacement source for one cube face.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Heightmap {
    /// No displacement: every sample is zero.
    #[default]
    Flat,
    /// Displacement read from a byte buffer.
    Sampled(SampledHeightmap),
}

impl Heightmap {
    /// Convenience for `Heightmap::Sampled(SampledHeightmap::new(..)?)`.
    pub fn sampled(
        resolution: u32,
        data: impl Into<Arc<[u8]>>,
        at: usize,
        step: usize,
    ) -> Result<Self, HeightmapError> {
        SampledHeightmap::new(resolution, data, at, step).map(Heightmap::Sampled)
    }

    /// Unscaled height at `uv`.
    #[inline]
    pub fn sample(&self, uv: DVec2) -> f64 {
        match self {
            Heightmap::Flat => 0.0,
            Heightmap::Sampled(map) => f64::from(map.sample(uv)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_2x2() -> SampledHeightmap {
        // RGBA texels, height in the green channel.
        let data = vec![
            0, 10, 0, 0, //
            0, 20, 0, 0, //
            0, 30, 0, 0, //
            0, 40, 0, 0,
        ];
        SampledHeightmap::new(2, data, 1, 4).unwrap()
    }

    #[test]
    fn test_flat_samples_zero() {
        let map = Heightmap::default();
        assert_eq!(map, Heightmap::Flat);
        assert_eq!(map.sample(DVec2::new(0.3, 0.9)), 0.0);
    }

    #[test]
    fn test_nearest_texel_lookup() {
        let map = ramp_2x2();
        assert_eq!(map.sample(DVec2::new(0.1, 0.1)), 10);
        assert_eq!(map.sample(DVec2::new(0.6, 0.1)), 20);
        assert_eq!(map.sample(DVec2::new(0.1, 0.6)), 30);
        assert_eq!(map.sample(DVec2::new(0.6, 0.6)), 40);
    }

    #[test]
    fn test_upper_edge_clamps_to_last_texel() {
        let map = ramp_2x2();
        assert_eq!(map.sample(DVec2::new(1.0, 1.0)), 40);
        assert_eq!(map.sample(DVec2::new(7.5, 0.0)), 20);
    }

    #[test]
    fn test_negative_coordinates_clamp_to_first_texel() {
        let map = ramp_2x2();
        assert_eq!(map.sample(DVec2::new(-0.5, -3.0)), 10);
    }

    #[test]
    fn test_nan_coordinate_reads_first_texel() {
        let map = ramp_2x2();
        assert_eq!(map.sample(DVec2::new(f64::NAN, 0.0)), 10);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let err = SampledHeightmap::new(2, vec![0u8; 13], 1, 4).unwrap_err();
        assert_eq!(
            err,
            HeightmapError::SampleOutOfBounds {
                required: 13,
                len: 13
            }
        );
        assert!(err.to_string().contains("heightmap sample out of bounds"));
    }

    #[test]
    fn test_exact_length_buffer_is_accepted() {
        assert!(SampledHeightmap::new(2, vec![0u8; 14], 1, 4).is_ok());
        assert!(SampledHeightmap::new(3, vec![0u8; 9], 0, 1).is_ok());
    }

    #[test]
    fn test_zero_resolution_is_rejected() {
        let err = Heightmap::sampled(0, vec![0u8; 4], 0, 1).unwrap_err();
        assert_eq!(err, HeightmapError::ZeroResolution);
    }

    #[test]
    fn test_overflowing_layout_is_rejected() {
        let err = SampledHeightmap::new(4, vec![0u8; 64], 0, usize::MAX).unwrap_err();
        assert!(matches!(err, HeightmapError::SampleOutOfBounds { .. }));
    }

    #[test]
    fn test_buffer_is_shared_not_copied() {
        let data: Arc<[u8]> = Arc::from(vec![7u8; 16]);
        let map = SampledHeightmap::new(4, Arc::clone(&data), 0, 1).unwrap();
        assert!(Arc::ptr_eq(map.data(), &data));
        assert_eq!(
            Heightmap::Sampled(map).sample(DVec2::new(0.5, 0.5)),
            7.0
        );
    }
}
