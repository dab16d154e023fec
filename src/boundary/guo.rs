//! Guo extrapolation velocity/pressure boundary condition: the missing
//! populations are reconstructed from the wall's prescribed macroscopic
//! values plus the non-equilibrium part of the fluid-side neighbour cell,
//! rather than a pure reflection. Runs before the bulk collide-stream sweep,
//! seeding the addresses that sweep is about to read. Grounded on
//! `boundary_guo.hpp` and `boundary_type.hpp`.

use super::{velocity_component, BoundaryCondition, BoundaryElement};
use crate::collision::{equilibrium, moments, Moments};
use crate::lattice::Lattice;
use crate::population::aa::{Even, Odd, Phase, Timestep};
use crate::population::{LatticeFloat, Population};

/// Which macroscopic components a Guo element enforces versus interpolates
/// from the fluid-side neighbour. A velocity boundary enforces `(u, v, w)`
/// and interpolates `rho`; a pressure boundary enforces `rho` and the
/// tangential velocity components, interpolating the through-flow one.
#[derive(Copy, Clone, Debug, Default)]
pub enum GuoKind {
    #[default]
    Velocity,
    Pressure,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Guo(pub GuoKind);

impl<L: Lattice, T: LatticeFloat> BoundaryCondition<L, T> for Guo {
    fn before_collision(&self, pop: &mut Population<L, T>, step: Timestep, elements: &[BoundaryElement<T>]) {
        match step {
            Timestep::Even => apply_typed::<Even, L, T>(self.0, pop, elements),
            Timestep::Odd => apply_typed::<Odd, L, T>(self.0, pop, elements),
        }
    }
}

fn apply_typed<P: Phase, L: Lattice, T: LatticeFloat>(
    kind: GuoKind,
    pop: &mut Population<L, T>,
    elements: &[BoundaryElement<T>],
) {
    let mut f = vec![T::zero(); L::ND];
    for el in elements {
        let (nx, ny, nz) = el.orientation.normal();
        let (xn, yn, zn) = pop.shape().wrap(el.x, el.y, el.z, nx, ny, nz);
        pop.read_cell::<P>(xn, yn, zn, 0, &mut f);
        let interp = moments::<L, T>(&f);

        let wall = match kind {
            GuoKind::Velocity => Moments { rho: interp.rho, u: el.values.u, v: el.values.v, w: el.values.w },
            GuoKind::Pressure => {
                let nx = T::from(nx).unwrap();
                let ny = T::from(ny).unwrap();
                let nz = T::from(nz).unwrap();
                Moments {
                    rho: el.values.rho.unwrap_or_else(T::one),
                    u: velocity_component(nx, el.values.u, interp.u),
                    v: velocity_component(ny, el.values.v, interp.v),
                    w: velocity_component(nz, el.values.w, interp.w),
                }
            }
        };

        for n in 0..2 {
            for d in 0..L::OFF {
                let k = n * L::OFF + d;
                let mk = T::from(L::mask()[k]).unwrap();
                if mk == T::zero() {
                    continue;
                }
                let feq_interp = equilibrium::<L, T>(k, &interp);
                let fneq = f[k] - feq_interp;
                f[k] = equilibrium::<L, T>(k, &wall) + fneq;
            }
        }
        pop.write_cell::<P>(el.x, el.y, el.z, 0, &f);
    }
}
