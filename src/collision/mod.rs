//! Collision operators: given a cell's pre-collision populations, relax them
//! towards equilibrium. Grounded on `collision.hpp`'s CRTP base (moment
//! accumulation, equilibrium formula shared by every operator) with the
//! concrete relaxation rules split out per operator.

pub mod bgk;
pub mod smagorinsky;
pub mod trt;

pub use bgk::Bgk;
pub use smagorinsky::Smagorinsky;
pub use trt::Trt;

use crate::lattice::Lattice;
use crate::population::LatticeFloat;

/// The zeroth and first hydrodynamic moments of a cell: density and
/// velocity components.
#[derive(Copy, Clone, Debug, Default)]
pub struct Moments<T> {
    pub rho: T,
    pub u: T,
    pub v: T,
    pub w: T,
}

/// Accumulates density and velocity from a cell's `L::ND` direction slots.
/// `f` must be laid out `[n*OFF+d]` exactly like [`crate::population::Population::read_cell`]
/// produces.
pub fn moments<L: Lattice, T: LatticeFloat>(f: &[T]) -> Moments<T> {
    let mut rho = T::zero();
    let mut u = T::zero();
    let mut v = T::zero();
    let mut w = T::zero();
    for n in 0..2 {
        for d in 0..L::OFF {
            let k = n * L::OFF + d;
            let mk = T::from(L::mask()[k]).unwrap();
            let fk = f[k] * mk;
            rho = rho + fk;
            u = u + fk * T::from(L::dx()[k]).unwrap();
            v = v + fk * T::from(L::dy()[k]).unwrap();
            w = w + fk * T::from(L::dz()[k]).unwrap();
        }
    }
    let inv_rho = T::one() / rho;
    Moments {
        rho,
        u: u * inv_rho,
        v: v * inv_rho,
        w: w * inv_rho,
    }
}

/// `f_eq(k) = W[k] * (rho + rho * (cu * (1 + cu/2) + uu))`, with
/// `cu = (u*DX[k] + v*DY[k] + w*DZ[k]) / CS2` and `uu = -(u^2+v^2+w^2)/(2*CS2)`.
#[inline(always)]
pub fn equilibrium<L: Lattice, T: LatticeFloat>(k: usize, m: &Moments<T>) -> T {
    let cs2 = T::from(L::CS2).unwrap();
    let two = T::from(2.0).unwrap();
    let half = T::one() / two;
    let dxk = T::from(L::dx()[k]).unwrap();
    let dyk = T::from(L::dy()[k]).unwrap();
    let dzk = T::from(L::dz()[k]).unwrap();
    let wk = T::from(L::w()[k]).unwrap();
    let cu = (m.u * dxk + m.v * dyk + m.w * dzk) / cs2;
    let uu = -(m.u * m.u + m.v * m.v + m.w * m.w) / (two * cs2);
    wk * (m.rho + m.rho * (cu * (T::one() + cu * half) + uu))
}

/// A relaxation rule applied to a cell's pre-collision populations, producing
/// the post-collision populations in place. Implementors read `f` and the
/// already-accumulated `moments` and write the relaxed result back into `f`.
pub trait CollisionOperator<L: Lattice, T: LatticeFloat>: Send + Sync {
    fn relax(&self, f: &mut [T], m: &Moments<T>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::D2Q9;

    #[test]
    fn equilibrium_at_rest_reduces_to_weight_times_density() {
        let m = Moments { rho: 2.0, u: 0.0, v: 0.0, w: 0.0 };
        for k in 0..D2Q9::ND {
            let feq: f64 = equilibrium::<D2Q9, f64>(k, &m);
            assert!((feq - D2Q9::w()[k] * m.rho).abs() < 1e-14);
        }
    }

    #[test]
    fn moments_recover_uniform_rest_density() {
        let mut f = [0.0f64; 10];
        for n in 0..2 {
            for d in 0..D2Q9::OFF {
                let k = n * D2Q9::OFF + d;
                f[k] = D2Q9::w()[k] * 3.0;
            }
        }
        let m = moments::<D2Q9, f64>(&f);
        assert!((m.rho - 3.0).abs() < 1e-12);
        assert!(m.u.abs() < 1e-12 && m.v.abs() < 1e-12);
    }
}
