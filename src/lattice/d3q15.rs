use super::Lattice;

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// The D3Q15 stencil (15 speeds, 3D), padded to 16 slots so `OFF = 8`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct D3Q15;

#[rustfmt::skip]
const DX: [f64; 16] = [
    0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0,
    0.0, -1.0, 0.0, 0.0, -1.0, -1.0, -1.0, -1.0,
];
#[rustfmt::skip]
const DY: [f64; 16] = [
    0.0, 0.0, 1.0, 0.0, 1.0, -1.0, 1.0, -1.0,
    0.0, 0.0, -1.0, 0.0, -1.0, 1.0, -1.0, 1.0,
];
#[rustfmt::skip]
const DZ: [f64; 16] = [
    0.0, 0.0, 0.0, 1.0, 1.0, 1.0, -1.0, -1.0,
    0.0, 0.0, 0.0, -1.0, -1.0, -1.0, 1.0, 1.0,
];

const W2: f64 = 2.0 / 9.0;
const W1: f64 = 1.0 / 9.0;
const W8: f64 = 1.0 / 72.0;
#[rustfmt::skip]
const W: [f64; 16] = [
    W2, W1, W1, W1, W8, W8, W8, W8,
    W2, W1, W1, W1, W8, W8, W8, W8,
];

#[rustfmt::skip]
const MASK: [f64; 16] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
    0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
];

impl Lattice for D3Q15 {
    const DIM: usize = 3;
    const SPEEDS: usize = 15;
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
        "D3Q15"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = D3Q15::w().iter().zip(D3Q15::mask()).map(|(w, m)| w * m).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn directions_cancel() {
        let sx: f64 = D3Q15::dx().iter().zip(D3Q15::mask()).map(|(d, m)| d * m).sum();
        let sy: f64 = D3Q15::dy().iter().zip(D3Q15::mask()).map(|(d, m)| d * m).sum();
        let sz: f64 = D3Q15::dz().iter().zip(D3Q15::mask()).map(|(d, m)| d * m).sum();
        assert!(sx.abs() < 1e-12 && sy.abs() < 1e-12 && sz.abs() < 1e-12);
    }

    #[test]
    fn offsets_match_q15p16() {
        assert_eq!(D3Q15::OFF, 8);
        assert_eq!(D3Q15::ND, 16);
    }
}
