use super::Lattice;

const SQRT3: f64 = 1.732_050_807_568_877_2;

/// The D3Q19 stencil (19 speeds, 3D), padded to 20 slots so `OFF = 10`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct D3Q19;

#[rustfmt::skip]
const DX: [f64; 20] = [
    0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0,
    0.0, -1.0, 0.0, 0.0, -1.0, -1.0, -1.0, -1.0, 0.0, 0.0,
];
#[rustfmt::skip]
const DY: [f64; 20] = [
    0.0, 0.0, 1.0, 0.0, 1.0, -1.0, 0.0, 0.0, 1.0, 1.0,
    0.0, 0.0, -1.0, 0.0, -1.0, 1.0, 0.0, 0.0, -1.0, -1.0,
];
#[rustfmt::skip]
const DZ: [f64; 20] = [
    0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, -1.0, 1.0, -1.0,
    0.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 1.0, -1.0, 1.0,
];

const W3: f64 = 1.0 / 3.0;
const W18: f64 = 1.0 / 18.0;
const W36: f64 = 1.0 / 36.0;
#[rustfmt::skip]
const W: [f64; 20] = [
    W3, W18, W18, W18, W36, W36, W36, W36, W36, W36,
    W3, W18, W18, W18, W36, W36, W36, W36, W36, W36,
];

#[rustfmt::skip]
const MASK: [f64; 20] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
    0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
];

impl Lattice for D3Q19 {
    const DIM: usize = 3;
    const SPEEDS: usize = 19;
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
        "D3Q19"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = D3Q19::w().iter().zip(D3Q19::mask()).map(|(w, m)| w * m).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn directions_cancel() {
        let sx: f64 = D3Q19::dx().iter().zip(D3Q19::mask()).map(|(d, m)| d * m).sum();
        let sy: f64 = D3Q19::dy().iter().zip(D3Q19::mask()).map(|(d, m)| d * m).sum();
        let sz: f64 = D3Q19::dz().iter().zip(D3Q19::mask()).map(|(d, m)| d * m).sum();
        assert!(sx.abs() < 1e-12 && sy.abs() < 1e-12 && sz.abs() < 1e-12);
    }

    #[test]
    fn offsets_match_q19p20() {
        assert_eq!(D3Q19::OFF, 10);
        assert_eq!(D3Q19::ND, 20);
    }
}
