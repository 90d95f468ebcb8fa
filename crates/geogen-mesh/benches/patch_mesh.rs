use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geogen_cubesphere::CubeFace;
use geogen_math::Rect2;
use geogen_mesh::*;
use geogen_terrain::Heightmap;

fn heightmap_256() -> Heightmap {
    let data: Vec<u8> = (0..256 * 256 * 4).map(|i| (i % 251) as u8).collect();
    Heightmap::sampled(256, data, 0, 4).unwrap()
}

fn bench_index_pattern(c: &mut Criterion) {
    c.bench_function("index_pattern_r16", |bencher| {
        bencher.iter(|| black_box(IndexPattern::new(black_box(16))))
    });
    c.bench_function("index_pattern_r64", |bencher| {
        bencher.iter(|| black_box(IndexPattern::new(black_box(64))))
    });
}

fn bench_patch_mesh_flat(c: &mut Criterion) {
    let basis = CubeFace::PosY.basis();
    let params = SurfaceParams {
        radius: 500.0,
        height: 100.0 / 255.0,
        resolution: 16,
    };
    c.bench_function("patch_mesh_flat_r16", |bencher| {
        bencher.iter(|| {
            black_box(PatchMesh::build(
                &basis,
                Rect2::FACE,
                Rect2::UNIT,
                params,
                &Heightmap::Flat,
            ))
        })
    });
}

fn bench_patch_mesh_sampled(c: &mut Criterion) {
    let basis = CubeFace::NegZ.basis();
    let map = heightmap_256();
    let params = SurfaceParams {
        radius: 500.0,
        height: 100.0 / 255.0,
        resolution: 32,
    };
    let vert_box = Rect2::FACE.quadrants()[2].quadrants()[1];
    let uv_box = Rect2::UNIT.quadrants()[2].quadrants()[1];
    c.bench_function("patch_mesh_sampled_r32", |bencher| {
        bencher.iter(|| black_box(PatchMesh::build(&basis, vert_box, uv_box, params, &map)))
    });
}

criterion_group!(
    benches,
    bench_index_pattern,
    bench_patch_mesh_flat,
    bench_patch_mesh_sampled
);
criterion_main!(benches);
