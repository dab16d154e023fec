//! Two-relaxation-time collision: symmetric and antisymmetric parts of the
//! non-equilibrium populations relax at different rates, controlled by a
//! "magic" parameter that tunes the scheme's stability/accuracy trade-off.
//! Grounded on `collision_trt.hpp`.

use super::{equilibrium, CollisionOperator, Moments};
use crate::lattice::Lattice;
use crate::population::LatticeFloat;

/// Default magic parameter, matching the original's choice.
pub const LAMBDA_DEFAULT: f64 = 0.25;

#[derive(Copy, Clone, Debug)]
pub struct Trt<T> {
    pub omega_p: T,
    pub omega_m: T,
}

impl<T: LatticeFloat> Trt<T> {
    pub fn from_tau(tau: T, lambda: T) -> Self {
        let half = T::one() / T::from(2.0).unwrap();
        let omega_p = T::one() / tau;
        let omega_m = (tau - half) / (lambda + half * (tau - half));
        Trt { omega_p, omega_m }
    }

    pub fn from_tau_default_lambda(tau: T) -> Self {
        Self::from_tau(tau, T::from(LAMBDA_DEFAULT).unwrap())
    }
}

impl<L: Lattice, T: LatticeFloat> CollisionOperator<L, T> for Trt<T> {
    fn relax(&self, f: &mut [T], m: &Moments<T>) {
        let half = T::one() / T::from(2.0).unwrap();

        // The rest direction (d = 0) has no antipode of its own; its mirror
        // slot at OFF is a masked-off duplicate carrying a spurious
        // equilibrium value, not a genuine non-equilibrium partner, so it
        // relaxes on its own with a plain BGK rule at the symmetric rate.
        let feq_0 = equilibrium::<L, T>(0, m);
        f[0] = T::from(L::mask()[0]).unwrap() * (f[0] - self.omega_p * (f[0] - feq_0));

        // d in [1, HSPEED) are the real non-rest directions; OFF + d is
        // their true antipode (see Lattice::HSPEED).
        for d in 1..L::HSPEED {
            let kp = d;
            let km = L::OFF + d;
            let mp = T::from(L::mask()[kp]).unwrap();
            let mm = T::from(L::mask()[km]).unwrap();
            let feq_p = equilibrium::<L, T>(kp, m);
            let feq_m = equilibrium::<L, T>(km, m);
            let fneq_p = f[kp] - feq_p;
            let fneq_m = f[km] - feq_m;
            let sym = half * (fneq_p + fneq_m);
            let antisym = half * (fneq_p - fneq_m);
            f[kp] = mp * (f[kp] - self.omega_p * sym - self.omega_m * antisym);
            f[km] = mm * (f[km] - self.omega_p * sym + self.omega_m * antisym);
        }

        // Every remaining slot is padding (the rest direction's masked
        // duplicate at OFF, plus a cache-padded lattice's extra unused
        // slots): the write must still cover all ND slots, masked to 0.
        f[L::OFF] = T::zero();
        for d in L::HSPEED..L::OFF {
            f[d] = T::zero();
            f[L::OFF + d] = T::zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::D2Q9;

    #[test]
    fn equilibrium_distribution_is_a_fixed_point() {
        let m = Moments { rho: 1.0, u: 0.0, v: 0.0, w: 0.0 };
        let mut f = [0.0f64; 10];
        for n in 0..2 {
            for d in 0..D2Q9::OFF {
                let k = n * D2Q9::OFF + d;
                f[k] = equilibrium::<D2Q9, f64>(k, &m) * D2Q9::mask()[k];
            }
        }
        let before = f;
        let op = Trt::from_tau_default_lambda(0.8f64);
        CollisionOperator::<D2Q9, f64>::relax(&op, &mut f, &m);
        for k in 0..D2Q9::ND {
            assert!((f[k] - before[k]).abs() < 1e-10);
        }
    }
}
