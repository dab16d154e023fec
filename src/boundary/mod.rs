//! Boundary conditions applied to a subset of cells before and/or after the
//! bulk collide-stream step. Grounded on `boundary.hpp`/`boundary_type.hpp`.

pub mod bounceback;
pub mod guo;
pub mod orientation;

pub use bounceback::Bounceback;
pub use guo::{Guo, GuoKind};
pub use orientation::Orientation;

use crate::lattice::Lattice;
use crate::population::aa::Timestep;
use crate::population::{LatticeFloat, Population};

/// Prescribed macroscopic values a boundary element enforces. Unset
/// components default to zero, matching a no-slip wall unless overridden.
#[derive(Copy, Clone, Debug, Default)]
pub struct MacroscopicValues<T> {
    pub rho: Option<T>,
    pub u: T,
    pub v: T,
    pub w: T,
}

/// A single cell on the domain boundary, together with the face it sits on
/// and the values it should enforce.
#[derive(Copy, Clone, Debug)]
pub struct BoundaryElement<T> {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub orientation: Orientation,
    pub values: MacroscopicValues<T>,
}

/// Picks between a boundary-enforced value and a neighbour-interpolated one
/// for a single velocity component, per `boundary_type.hpp`'s
/// `velocityComponent`: `normal` is that axis's component of the face's
/// normal, zero for a tangential axis and non-zero for the through-flow
/// axis. A velocity boundary enforces every axis; a pressure boundary keeps
/// this selection instead, enforcing only the tangential components and
/// letting the through-flow speed come from the interpolated value.
pub fn velocity_component<T: LatticeFloat>(normal: T, enforced: T, interpolated: T) -> T {
    if normal == T::zero() {
        enforced
    } else {
        interpolated
    }
}

/// A rule for correcting populations at a set of boundary elements around
/// the bulk collide-stream sweep. Takes the step's runtime [`Timestep`]
/// parity and dispatches once into the monomorphic `Even`/`Odd` population
/// accessors rather than branching per direction slot. `before_collision`
/// runs ahead of `collide_stream` (Guo's non-equilibrium extrapolation, which
/// seeds the addresses that step is about to read); `after_collision` runs
/// once it has (bounce-back's reflection of the freshly streamed-in
/// populations). Either may be left as a no-op by a condition that only
/// needs the other phase.
pub trait BoundaryCondition<L: Lattice, T: LatticeFloat>: Send + Sync {
    #[allow(unused_variables)]
    fn before_collision(&self, pop: &mut Population<L, T>, step: Timestep, elements: &[BoundaryElement<T>]) {}

    #[allow(unused_variables)]
    fn after_collision(&self, pop: &mut Population<L, T>, step: Timestep, elements: &[BoundaryElement<T>]) {}
}

/// Every cell on the axis-aligned face named by `orientation`, each carrying
/// the same prescribed macroscopic values. The construction layer calls this
/// once per configured boundary to turn a face selector into the explicit
/// per-cell element list the BC hooks operate on.
pub fn face_elements<T: LatticeFloat>(
    nx: usize,
    ny: usize,
    nz: usize,
    orientation: Orientation,
    values: MacroscopicValues<T>,
) -> Vec<BoundaryElement<T>> {
    let mut elements = Vec::new();
    let (x_fixed, y_fixed, z_fixed) = match orientation {
        Orientation::Left => (Some(0), None, None),
        Orientation::Right => (Some(nx - 1), None, None),
        Orientation::Front => (None, Some(0), None),
        Orientation::Back => (None, Some(ny - 1), None),
        Orientation::Bottom => (None, None, Some(0)),
        Orientation::Top => (None, None, Some(nz - 1)),
    };
    for z in 0..nz {
        if z_fixed.is_some_and(|zf| zf != z) {
            continue;
        }
        for y in 0..ny {
            if y_fixed.is_some_and(|yf| yf != y) {
                continue;
            }
            for x in 0..nx {
                if x_fixed.is_some_and(|xf| xf != x) {
                    continue;
                }
                elements.push(BoundaryElement { x, y, z, orientation, values });
            }
        }
    }
    elements
}
