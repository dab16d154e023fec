use super::Lattice;

const SQRT3: f64 = 1.732_050_807_568_877_2;

const W27: f64 = 8.0 / 27.0;
const W27_2: f64 = 2.0 / 27.0;
const W54: f64 = 1.0 / 54.0;
const W216: f64 = 1.0 / 216.0;

/// The D3Q27 stencil (27 speeds, 3D), padded to 28 slots so `OFF = 14`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct D3Q27;

#[rustfmt::skip]
const DX: [f64; 28] = [
    0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0,
    0.0, -1.0, 0.0, 0.0, -1.0, -1.0, -1.0, -1.0, 0.0, 0.0, -1.0, -1.0, -1.0, -1.0,
];
#[rustfmt::skip]
const DY: [f64; 28] = [
    0.0, 0.0, 1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 1.0, 1.0, -1.0, 1.0, -1.0,
    0.0, 0.0, -1.0, 0.0, -1.0, 1.0, 0.0, 0.0, -1.0, -1.0, -1.0, 1.0, -1.0, 1.0,
];
#[rustfmt::skip]
const DZ: [f64; 28] = [
    0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0,
    0.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0,
];

#[rustfmt::skip]
const W: [f64; 28] = [
    W27, W27_2, W27_2, W27_2, W54, W54, W54, W54, W54, W54, W216, W216, W216, W216,
    W27, W27_2, W27_2, W27_2, W54, W54, W54, W54, W54, W54, W216, W216, W216, W216,
];

#[rustfmt::skip]
const MASK: [f64; 28] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
    0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
];

impl Lattice for D3Q27 {
    const DIM: usize = 3;
    const SPEEDS: usize = 27;
    const PAD: usize = 1;
    const CS: f64 = 1.0 / SQRT3;
    const CS_SQUARED: f64 = 1.0 / 3.0;

    fn dx() -> &'static [f64] {
        &DX
    }
    fn dy() -> &'static [f64] {
        &DY
    }
    fn dz() -> &'static [f64] {
        &DZ
    }
    fn w() -> &'static [f64] {
        &W
    }
    fn mask() -> &'static [f64] {
        &MASK
    }
    fn name() -> &'static str {
        "D3Q27"
    }
}

/// A D3Q27 variant whose padding is sized to round each AA half up to a
/// 64-byte cache line for `f64` storage (`PAD = 5`, `OFF = 16`) instead of
/// the minimal single padding slot used by [`D3Q27`]. Same 27 physical
/// directions and weights, rearranged so both halves land on a cache-line
/// boundary.
///
/// The two halves keep the same `OFF + d` antipode convention as the plain
/// stencils: `d` in `[1, HSPEED)` is a real direction and `OFF + d` is its
/// antipode (`HSPEED = 14 < OFF = 16` here, so `d in [14, OFF)` in *both*
/// halves is unused padding rather than a second set of real directions).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct D3Q27Cache;

#[rustfmt::skip]
const DXC: [f64; 32] = [
    0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0,
    0.0, -1.0, 0.0, 0.0, -1.0, -1.0, -1.0, -1.0, 0.0, 0.0, -1.0, -1.0, -1.0, -1.0, 0.0, 0.0,
];
#[rustfmt::skip]
const DYC: [f64; 32] = [
    0.0, 0.0, 1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 1.0, 1.0, -1.0, 1.0, -1.0, 0.0, 0.0,
    0.0, 0.0, -1.0, 0.0, -1.0, 1.0, 0.0, 0.0, -1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 0.0, 0.0,
];
#[rustfmt::skip]
const DZC: [f64; 32] = [
    0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 0.0, 0.0,
    0.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 0.0, 0.0,
];

// Index 16 (= OFF + 0) carries a masked-off duplicate of the rest weight,
// matching the single-pad stencils' convention that the unmasked weight
// array sums to `1 + W[0]`, not just `1`; indices 14, 15, 30, 31 are plain
// unused padding.
#[rustfmt::skip]
const WC: [f64; 32] = [
    W27, W27_2, W27_2, W27_2, W54, W54, W54, W54, W54, W54, W216, W216, W216, W216, 0.0, 0.0,
    W27, W27_2, W27_2, W27_2, W54, W54, W54, W54, W54, W54, W216, W216, W216, W216, 0.0, 0.0,
];

#[rustfmt::skip]
const MASKC: [f64; 32] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0,
];

impl Lattice for D3Q27Cache {
    const DIM: usize = 3;
    const SPEEDS: usize = 27;
    const PAD: usize = 5;
    const CS: f64 = 1.0 / SQRT3;
    const CS_SQUARED: f64 = 1.0 / 3.0;

    fn dx() -> &'static [f64] {
        &DXC
    }
    fn dy() -> &'static [f64] {
        &DYC
    }
    fn dz() -> &'static [f64] {
        &DZC
    }
    fn w() -> &'static [f64] {
        &WC
    }
    fn mask() -> &'static [f64] {
        &MASKC
    }
    fn name() -> &'static str {
        "D3Q27Cache"
    }
}
