//! Headless planet LOD demo.
//!
//! Builds a planet with seeded random terrain on every face, flies a camera
//! from far orbit down to just above the +Y face, and logs how the patch trees
//! react on each tick.
//!
//! Run with `cargo run -p geogen-demo -- --ticks 60 --log-level debug`.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use geogen_config::{CliArgs, Config, PlanetConfig, default_config_dir};
use geogen_cubesphere::CubeFace;
use geogen_lod::RecordingSink;
use geogen_planet::{FaceGenerator, FaceGeneratorConfig};
use geogen_terrain::{Heightmap, HeightmapError};
use glam::DVec3;
use noise::{NoiseFn, Simplex};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{error, info, warn};

/// Texels per side of the generated heightmaps.
const HEIGHTMAP_RESOLUTION: u32 = 64;
/// Simplex octaves summed per texel.
const OCTAVES: u32 = 4;
/// Frequency of the first octave, in cycles per face.
const BASE_FREQUENCY: f64 = 3.0;
const TERRAIN_SEED: u64 = 42;
/// Starting camera distance, in planet radii.
const ORBIT_RADII: f64 = 8.0;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| "geogen".into());

    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    geogen_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Some(e) = load_error {
        warn!("Failed to load config from {}: {e}, using defaults", config_dir.display());
    }

    let heightmaps = match build_heightmaps(TERRAIN_SEED) {
        Ok(heightmaps) => heightmaps,
        Err(e) => {
            error!("Failed to build heightmaps: {e}");
            return ExitCode::FAILURE;
        }
    };

    let planet = &config.planet;
    let face_config = generator_config(planet, heightmaps);
    let mut generator = FaceGenerator::new(face_config, RecordingSink::new());

    for tick in 0..args.ticks {
        let camera = camera_at(planet, tick, args.ticks);
        generator.sink().set_camera(camera);
        generator.update();

        let stats = generator.stats();
        info!(
            tick,
            altitude = camera.length() - planet.radius,
            built = stats.built_patches,
            visible = stats.visible_patches,
            detailed = stats.detailed_patches,
            offsite = stats.offsite_faces,
            depth = stats.max_built_depth,
            "tick"
        );
    }

    let scene = generator.sink().scene();
    let vertices: usize = scene.patches.iter().map(|p| p.vertex_count).sum();
    let visible_faces: Vec<CubeFace> = CubeFace::ALL
        .into_iter()
        .filter(|face| !generator.root(*face).is_offsite())
        .collect();
    info!(
        "Demo finished: {} patches registered ({} vertices), {} visible, faces in view: {:?}",
        scene.patches.len(),
        vertices,
        scene.visible_count(),
        visible_faces
    );

    ExitCode::SUCCESS
}

fn generator_config(
    planet: &PlanetConfig,
    heightmaps: [Arc<Heightmap>; 6],
) -> FaceGeneratorConfig {
    FaceGeneratorConfig {
        radius: planet.radius,
        height: planet.height,
        thresholds: planet.thresholds.clone(),
        resolution: planet.resolution,
        heightmaps,
    }
}

/// One seeded single-channel heightmap per face.
///
/// Per-face noise seeds are drawn from one generator seeded with `seed`.
fn build_heightmaps(seed: u64) -> Result<[Arc<Heightmap>; 6], HeightmapError> {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut heightmaps: [Arc<Heightmap>; 6] = Default::default();
    for face in CubeFace::ALL {
        let noise = Simplex::new(rng.next_u32());
        let data = fbm_bytes(&noise, HEIGHTMAP_RESOLUTION as usize);
        let heightmap = Heightmap::sampled(HEIGHTMAP_RESOLUTION, data, 0, 1)?;
        heightmaps[face.index()] = Arc::new(heightmap);
    }
    Ok(heightmaps)
}

/// Fractal Brownian motion over the face's uv grid, quantised to `size × size` bytes.
fn fbm_bytes(noise: &Simplex, size: usize) -> Vec<u8> {
    let mut max_amplitude = 0.0;
    let mut amplitude = 1.0;
    for _ in 0..OCTAVES {
        max_amplitude += amplitude;
        amplitude *= 0.5;
    }

    let mut data = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let u = col as f64 / size as f64;
            let v = row as f64 / size as f64;

            let mut total = 0.0;
            let mut frequency = BASE_FREQUENCY;
            let mut amplitude = 1.0;
            for _ in 0..OCTAVES {
                total += noise.get([u * frequency, v * frequency]) * amplitude;
                frequency *= 2.0;
                amplitude *= 0.5;
            }

            let normalized = (total / max_amplitude) * 0.5 + 0.5;
            data.push((normalized * 255.0).round().clamp(0.0, 255.0) as u8);
        }
    }
    data
}

/// Camera position for `tick` of a `ticks`-long descent toward the +Y face.
///
/// Altitude shrinks geometrically from [`ORBIT_RADII`] planet radii to just
/// above the highest possible terrain.
fn camera_at(planet: &PlanetConfig, tick: u32, ticks: u32) -> DVec3 {
    let peak = planet.radius + planet.height * 255.0;
    let start = planet.radius * ORBIT_RADII;
    let end = peak + planet.radius * 0.01;
    let t = if ticks > 1 {
        f64::from(tick) / f64::from(ticks - 1)
    } else {
        1.0
    };
    let distance = start * (end / start).powf(t);
    // Slight tilt so the descent is not exactly on a face axis.
    DVec3::new(0.05, 1.0, 0.1).normalize() * distance
}
