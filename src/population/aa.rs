//! The A-A access pattern (Bailey et al. 2009): streaming and collision share
//! a single population buffer by alternating, every other time step, which
//! half of each cell's direction slots is read "in place" versus read from a
//! neighbour. Grounded on `aa_pattern.hpp`'s `indexRead`/`indexWrite`.
//!
//! Both slot halves of a direction pair live at `n*OFF+d` for `n in {0, 1}`;
//! `!n` below always means "the other half".

use crate::lattice::Lattice;
use crate::population::indexing::Shape;

/// Marker for which half of the A-A cycle a step belongs to. Kept as a
/// sealed trait over zero-sized types so the hot collide-stream loop stays
/// monomorphic instead of branching on a runtime flag per cell.
pub trait Phase: Copy + Send + Sync + 'static {
    const IS_ODD: bool;
    type Opposite: Phase;
}

#[derive(Copy, Clone, Debug)]
pub struct Even;
#[derive(Copy, Clone, Debug)]
pub struct Odd;

impl Phase for Even {
    const IS_ODD: bool = false;
    type Opposite = Odd;
}

impl Phase for Odd {
    const IS_ODD: bool = true;
    type Opposite = Even;
}

/// Runtime counterpart of [`Phase`], used where the step parity is only
/// known at runtime (the driver's outer loop, configuration, reporting).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Timestep {
    Even,
    Odd,
}

impl std::ops::Not for Timestep {
    type Output = Timestep;
    fn not(self) -> Timestep {
        match self {
            Timestep::Even => Timestep::Odd,
            Timestep::Odd => Timestep::Even,
        }
    }
}

#[inline(always)]
fn opposite(n: usize) -> usize {
    1 - n
}

/// Read index for population slot `(n, d)` of population `p` at cell
/// `(x, y, z)`.
///
/// * Even step: in-place, slot swapped to `!n` (post-collision values from
///   the previous odd step already sit there).
/// * Odd step: fetched from the neighbour reached by stepping `-v(n, d)`,
///   slot `n` preserved.
#[inline(always)]
pub fn index_read<P: Phase, L: Lattice>(
    shape: &Shape,
    x: usize,
    y: usize,
    z: usize,
    n: usize,
    d: usize,
    p: usize,
) -> usize {
    if P::IS_ODD {
        let k = n * L::OFF + d;
        let (xn, yn, zn) = shape.wrap(x, y, z, -L::dx()[k], -L::dy()[k], -L::dz()[k]);
        shape.linear::<L>(xn, yn, zn, n, d, p)
    } else {
        shape.linear::<L>(x, y, z, opposite(n), d, p)
    }
}

/// Write index for population slot `(n, d)` of population `p` at cell
/// `(x, y, z)`.
///
/// * Odd step: in-place, slot swapped to `!n`.
/// * Even step: neighbour reached by stepping `-v(n, d)`, slot `n` preserved.
///
/// By construction `index_write::<Even>` is the same formula as
/// `index_read::<Odd>`, and `index_write::<Odd>` is the same formula as
/// `index_read::<Even>` — this is the round-trip invariant the A-A pattern
/// relies on to stream without a second buffer.
#[inline(always)]
pub fn index_write<P: Phase, L: Lattice>(
    shape: &Shape,
    x: usize,
    y: usize,
    z: usize,
    n: usize,
    d: usize,
    p: usize,
) -> usize {
    if P::IS_ODD {
        shape.linear::<L>(x, y, z, opposite(n), d, p)
    } else {
        let k = n * L::OFF + d;
        let (xn, yn, zn) = shape.wrap(x, y, z, -L::dx()[k], -L::dy()[k], -L::dz()[k]);
        shape.linear::<L>(xn, yn, zn, n, d, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::D3Q19;

    #[test]
    fn write_even_matches_read_odd_exactly() {
        let shape = Shape::new(7, 9, 11, 1);
        for z in 0..shape.nz {
            for y in 0..shape.ny {
                for x in 0..shape.nx {
                    for n in 0..2 {
                        for d in 0..D3Q19::OFF {
                            let w = index_write::<Even, D3Q19>(&shape, x, y, z, n, d, 0);
                            let r = index_read::<Odd, D3Q19>(&shape, x, y, z, n, d, 0);
                            assert_eq!(w, r);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn write_odd_matches_read_even_exactly() {
        let shape = Shape::new(7, 9, 11, 1);
        for z in 0..shape.nz {
            for y in 0..shape.ny {
                for x in 0..shape.nx {
                    for n in 0..2 {
                        for d in 0..D3Q19::OFF {
                            let w = index_write::<Odd, D3Q19>(&shape, x, y, z, n, d, 0);
                            let r = index_read::<Even, D3Q19>(&shape, x, y, z, n, d, 0);
                            assert_eq!(w, r);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn even_step_is_strictly_in_place() {
        let shape = Shape::new(5, 5, 5, 1);
        for d in 0..D3Q19::OFF {
            let r = index_read::<Even, D3Q19>(&shape, 2, 2, 2, 0, d, 0);
            assert_eq!(r, shape.linear::<D3Q19>(2, 2, 2, 1, d, 0));
        }
    }

    #[test]
    fn timestep_not_toggles() {
        assert_eq!(!Timestep::Even, Timestep::Odd);
        assert_eq!(!Timestep::Odd, Timestep::Even);
    }
}
