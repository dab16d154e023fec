use super::Lattice;

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// The D2Q9 stencil (9 speeds, 2D), padded to 10 slots so `OFF = 5`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct D2Q9;

const DX: [f64; 10] = [0.0, 1.0, 0.0, 1.0, -1.0, 0.0, -1.0, 0.0, -1.0, 1.0];
const DY: [f64; 10] = [0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, -1.0, -1.0, -1.0];
const DZ: [f64; 10] = [0.0; 10];

const W4: f64 = 4.0 / 9.0;
const W1: f64 = 1.0 / 9.0;
const W2: f64 = 1.0 / 36.0;
const W: [f64; 10] = [W4, W1, W1, W2, W2, W4, W1, W1, W2, W2];

const MASK: [f64; 10] = [1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0];

impl Lattice for D2Q9 {
    const DIM: usize = 2;
    const SPEEDS: usize = 9;
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
        "D2Q9"
    }
}
