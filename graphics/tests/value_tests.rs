//! Algebraic properties of the geometry and flag value types as used through
//! the graphics crate.

use rstest::rstest;

use vesper_graphics::types::{
    AspectMask, AspectMaskBit, ColorComponentFlag, ColorComponentFlags, MemoryBarrierBit,
    MemoryBarrierFlags,
};
use vesper_graphics::{Extent2d, Extent3d};

#[rstest]
#[case::unit(Extent3d::new(1, 1, 1), Extent3d::new(1, 1, 1))]
#[case::texture(Extent3d::new(1920, 1080, 1), Extent3d::new(2, 2, 1))]
#[case::volume(Extent3d::new(64, 32, 16), Extent3d::new(3, 5, 7))]
#[case::zero_lhs(Extent3d::ZERO, Extent3d::new(9, 9, 9))]
fn test_extent_arithmetic_cancels(#[case] a: Extent3d, #[case] b: Extent3d) {
    assert_eq!((a + b) - b, a);
    assert_eq!((a * b) / b, a);
}

#[rstest]
#[case::flat(1)]
#[case::deep(256)]
#[case::empty(0)]
fn test_extent_3d_to_2d(#[case] depth: u32) {
    let extent = Extent3d::new(800, 600, depth);
    assert_eq!(Extent2d::from(extent), Extent2d::new(800, 600));
}

#[rstest]
#[case::disjoint(ColorComponentFlag::R.into(), ColorComponentFlag::G | ColorComponentFlag::B)]
#[case::overlapping(ColorComponentFlag::Rgba.into(), ColorComponentFlag::A.into())]
#[case::empty(ColorComponentFlags::empty(), ColorComponentFlag::R.into())]
fn test_color_flags_algebra(#[case] x: ColorComponentFlags, #[case] y: ColorComponentFlags) {
    assert_eq!(x | y | x, x | y);
    assert!((x & !x).is_empty());
    assert!(!bool::from(x & !x));
}

#[test]
fn test_barrier_and_aspect_flags() {
    let barrier: MemoryBarrierFlags =
        MemoryBarrierBit::ShaderStorage | MemoryBarrierBit::CommandBuffer;
    assert!(barrier.contains(MemoryBarrierBit::CommandBuffer));
    assert!(!barrier.contains(MemoryBarrierBit::QueryCounter));
    assert_eq!(barrier | barrier, barrier);

    let aspect: AspectMask = [AspectMaskBit::Depth, AspectMaskBit::Stencil]
        .into_iter()
        .collect();
    assert!(aspect.intersects(AspectMaskBit::Stencil));
    assert!(!aspect.intersects(AspectMaskBit::Color));
}
