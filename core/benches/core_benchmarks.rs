use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vesper_core::{Extent2d, Extent3d, Flags, impl_flag_bits};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
enum Access {
    Read = 1 << 0,
    Write = 1 << 1,
    Map = 1 << 2,
}

impl_flag_bits!(Access: u32 { Read, Write, Map });

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

fn bench_extent_mip_chain(c: &mut Criterion) {
    c.bench_function("extent_mip_chain_4096", |b| {
        b.iter(|| {
            let mut extent = black_box(Extent3d::new(4096, 4096, 1));
            let mut levels = 0u32;
            while extent.width > 1 || extent.height > 1 {
                extent = (extent >> 1).max(Extent3d::splat(1));
                levels += 1;
            }
            black_box(levels)
        });
    });
}

fn bench_extent_min_fold(c: &mut Criterion) {
    let extents: Vec<Extent2d> = (1..64).map(|i| Extent2d::new(i * 31, i * 17)).collect();
    c.bench_function("extent_min_fold_64", |b| {
        b.iter(|| {
            black_box(&extents)
                .iter()
                .copied()
                .fold(Extent2d::splat(u32::MAX), Extent2d::min)
        });
    });
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

fn bench_flags_algebra(c: &mut Criterion) {
    c.bench_function("flags_union_and_check", |b| {
        b.iter(|| {
            let flags: Flags<Access> = black_box(Access::Read) | Access::Write;
            black_box(flags.contains(Access::Map) || flags.has_unknown_bits())
        });
    });
}

criterion_group!(
    benches,
    bench_extent_mip_chain,
    bench_extent_min_fold,
    bench_flags_algebra,
);
criterion_main!(benches);
