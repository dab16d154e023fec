//! Velocity-set descriptors (DdQq stencils) used by the A-A population layout.
//!
//! Every lattice is a zero-sized type carrying its geometry as associated
//! constants so the collision and indexing code can be generic over `L:
//! Lattice` and still get constant-folded array accesses.

mod d2q9;
mod d3q15;
mod d3q19;
mod d3q27;

pub use d2q9::D2Q9;
pub use d3q15::D3Q15;
pub use d3q19::D3Q19;
pub use d3q27::{D3Q27, D3Q27Cache};

/// A DdQq velocity set with an even padding slot inserted at `OFF` so that
/// `ND = 2*OFF` and the two timestep halves occupy equal, cache-aligned
/// ranges.
///
/// `SPEEDS` is the number of physical discrete velocities (including rest).
/// `PAD` is the number of unused padding slots added per half. `ND = (SPEEDS +
/// PAD) * 2` is the full per-cell population stride and `OFF = ND / 2` is the
/// offset between the two AA halves.
pub trait Lattice: Copy + Clone + Send + Sync + 'static {
    /// Spatial dimensionality (2 or 3).
    const DIM: usize;
    /// Number of physical discrete velocities, rest included.
    const SPEEDS: usize;
    /// Half-count of velocities: the number of slots in one AA half that
    /// carry a real, non-rest direction, `d in [1, HSPEED)` (plus the rest
    /// direction at `d = 0`). Equals `OFF` for every plain stencil; smaller
    /// than `OFF` for a cache-padded variant that reserves extra slots.
    const HSPEED: usize = (Self::SPEEDS + 1) / 2;
    /// Padding slots inserted across both halves so `OFF` lands on a
    /// friendly stride (1 for the plain stencils, more for cache-line
    /// padded variants).
    const PAD: usize;
    /// Total per-cell population stride (`SPEEDS + PAD`).
    const ND: usize = Self::SPEEDS + Self::PAD;
    /// Offset between the two AA halves (`ND / 2`).
    const OFF: usize = Self::ND / 2;
    /// Lattice speed of sound, `1/sqrt(3)` for every stencil here.
    const CS: f64;
    /// Squared lattice speed of sound, cached to avoid repeated sqrt folding.
    const CS2: f64 = Self::CS_SQUARED;
    #[doc(hidden)]
    const CS_SQUARED: f64;

    /// X components of the discrete velocities, padded to `ND` with zeros.
    fn dx() -> &'static [f64];
    /// Y components of the discrete velocities, padded to `ND` with zeros.
    fn dy() -> &'static [f64];
    /// Z components of the discrete velocities, padded to `ND` with zeros.
    fn dz() -> &'static [f64];
    /// Quadrature weights, padded to `ND` with zeros.
    fn w() -> &'static [f64];
    /// Active-slot mask: 0 at the padding index, 1 everywhere else.
    fn mask() -> &'static [f64];

    /// Human-readable stencil name, e.g. `"D3Q19"`.
    fn name() -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every stencil's *unmasked* `W` array sums to `1 + W[0]`: the rest
    /// weight is stored twice (once live, once in a masked-off padding
    /// slot) because the symmetric `n*OFF+d` layout mirrors direction 0
    /// across both AA halves even though the rest direction has no
    /// opposite.
    fn raw_weight_sum_matches_one_plus_rest<L: Lattice>() {
        let raw: f64 = L::w().iter().sum();
        assert!(
            (raw - (1.0 + L::w()[0])).abs() < 1e-15,
            "{}: raw weight sum {raw} != 1 + W[0] ({})",
            L::name(),
            1.0 + L::w()[0]
        );
    }

    #[test]
    fn raw_weight_sum_invariant_holds_for_every_stencil() {
        raw_weight_sum_matches_one_plus_rest::<D2Q9>();
        raw_weight_sum_matches_one_plus_rest::<D3Q15>();
        raw_weight_sum_matches_one_plus_rest::<D3Q19>();
        raw_weight_sum_matches_one_plus_rest::<D3Q27>();
        raw_weight_sum_matches_one_plus_rest::<D3Q27Cache>();
    }

    fn cs_is_one_over_sqrt3<L: Lattice>() {
        assert!((L::CS - 1.0 / 3.0_f64.sqrt()).abs() < 1e-15, "{}", L::name());
    }

    #[test]
    fn lattice_speed_of_sound_matches_every_stencil() {
        cs_is_one_over_sqrt3::<D2Q9>();
        cs_is_one_over_sqrt3::<D3Q15>();
        cs_is_one_over_sqrt3::<D3Q19>();
        cs_is_one_over_sqrt3::<D3Q27>();
        cs_is_one_over_sqrt3::<D3Q27Cache>();
    }
}
