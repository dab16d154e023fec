//! BGK single-relaxation-time collision. Grounded on `collision_bgk.hpp`.

use super::{equilibrium, CollisionOperator, Moments};
use crate::lattice::Lattice;
use crate::population::LatticeFloat;

/// `f_new(k) = MASK[k] * (f(k) + omega * (f_eq(k) - f(k)))`, `omega = 1/tau`.
#[derive(Copy, Clone, Debug)]
pub struct Bgk<T> {
    pub omega: T,
}

impl<T: LatticeFloat> Bgk<T> {
    pub fn from_tau(tau: T) -> Self {
        Bgk { omega: T::one() / tau }
    }
}

impl<L: Lattice, T: LatticeFloat> CollisionOperator<L, T> for Bgk<T> {
    fn relax(&self, f: &mut [T], m: &Moments<T>) {
        for n in 0..2 {
            for d in 0..L::OFF {
                let k = n * L::OFF + d;
                let mk = T::from(L::mask()[k]).unwrap();
                let feq = equilibrium::<L, T>(k, m);
                f[k] = mk * (f[k] + self.omega * (feq - f[k]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::moments;
    use crate::lattice::D2Q9;

    #[test]
    fn equilibrium_distribution_is_a_fixed_point() {
        let m = Moments { rho: 1.3, u: 0.01, v: -0.02, w: 0.0 };
        let mut f = [0.0f64; 10];
        for n in 0..2 {
            for d in 0..D2Q9::OFF {
                let k = n * D2Q9::OFF + d;
                f[k] = equilibrium::<D2Q9, f64>(k, &m) * D2Q9::mask()[k];
            }
        }
        let before = f;
        let op = Bgk::from_tau(0.8f64);
        CollisionOperator::<D2Q9, f64>::relax(&op, &mut f, &m);
        for k in 0..D2Q9::ND {
            assert!((f[k] - before[k]).abs() < 1e-12);
        }
    }

    #[test]
    fn relax_conserves_density_on_a_near_equilibrium_cell() {
        let m = Moments { rho: 1.0, u: 0.05, v: 0.0, w: 0.0 };
        let mut f = [0.0f64; 10];
        for n in 0..2 {
            for d in 0..D2Q9::OFF {
                let k = n * D2Q9::OFF + d;
                f[k] = equilibrium::<D2Q9, f64>(k, &m) * D2Q9::mask()[k];
            }
        }
        let op = Bgk::from_tau(1.0f64);
        CollisionOperator::<D2Q9, f64>::relax(&op, &mut f, &m);
        let rho_after: f64 = moments::<D2Q9, f64>(&f).rho;
        assert!((rho_after - m.rho).abs() < 1e-10);
    }
}
