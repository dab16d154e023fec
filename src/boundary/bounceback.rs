//! Halfway bounce-back: incoming populations are reflected straight back
//! along their own direction, optionally biased for a moving wall. Runs
//! after the bulk collide-stream sweep has streamed populations into the
//! boundary cell. Grounded on `boundary_bounceback.hpp`.

use super::{BoundaryCondition, BoundaryElement};
use crate::lattice::Lattice;
use crate::population::aa::{Even, Odd, Phase, Timestep};
use crate::population::{LatticeFloat, Population};

#[derive(Copy, Clone, Debug, Default)]
pub struct Bounceback;

impl<L: Lattice, T: LatticeFloat> BoundaryCondition<L, T> for Bounceback {
    fn after_collision(&self, pop: &mut Population<L, T>, step: Timestep, elements: &[BoundaryElement<T>]) {
        match step {
            Timestep::Even => apply_typed::<Even, L, T>(pop, elements),
            Timestep::Odd => apply_typed::<Odd, L, T>(pop, elements),
        }
    }
}

fn apply_typed<P: Phase, L: Lattice, T: LatticeFloat>(
    pop: &mut Population<L, T>,
    elements: &[BoundaryElement<T>],
) {
    let six = T::from(6.0).unwrap();
    // Every direction slot is read before any is written: a mirrored pair's
    // read and write addresses can coincide (the A-A read/write address sets
    // are the same set, just attributed to different (n, d) pairs), so an
    // interleaved read-then-write per slot would let one slot's write
    // clobber another slot's still-unread source.
    //
    // The rest direction (d = 0) has no antipode and is skipped entirely,
    // matching `boundary_bounceback.hpp`'s `d in [1, HSPEED)` loop.
    let mut f = vec![T::zero(); L::ND];
    for el in elements {
        let rho = el.values.rho.unwrap_or_else(T::one);
        for n in 0..2 {
            for d in 1..L::HSPEED {
                let k = n * L::OFF + d;
                f[k] = pop.read::<P::Opposite>(el.x, el.y, el.z, n, d, 0);
            }
        }
        for n in 0..2 {
            for d in 1..L::HSPEED {
                let k = n * L::OFF + d;
                let wk = T::from(L::w()[k]).unwrap();
                // Ladd's momentum correction, e_k . u_wall, so a wall moving
                // tangentially to its own face (a lid) biases the reflected
                // population the same way a wall blowing along its normal
                // does; a stationary wall (u_wall = 0) leaves it untouched.
                let dxk = T::from(L::dx()[k]).unwrap();
                let dyk = T::from(L::dy()[k]).unwrap();
                let dzk = T::from(L::dz()[k]).unwrap();
                let dot = dxk * el.values.u + dyk * el.values.v + dzk * el.values.w;
                let correction = six * wk * rho * dot;
                pop.write::<P>(el.x, el.y, el.z, 1 - n, d, 0, f[k] + correction);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::D2Q9;
    use crate::population::indexing::Shape;

    #[test]
    fn stationary_wall_reflects_without_net_velocity_bias() {
        let shape = Shape::new(3, 3, 1, 1);
        let mut pop: Population<D2Q9, f64> = Population::new(shape);
        pop.initialise_equilibrium(0, 1.0, 0.0, 0.0, 0.0);
        let bb = Bounceback;
        let elements = vec![BoundaryElement {
            x: 1,
            y: 0,
            z: 0,
            orientation: crate::boundary::Orientation::Back,
            values: Default::default(),
        }];
        BoundaryCondition::<D2Q9, f64>::after_collision(&bb, &mut pop, Timestep::Odd, &elements);

        let mut f = vec![0.0f64; D2Q9::ND];
        pop.read_cell::<Odd>(1, 0, 0, 0, &mut f);
        let m = crate::collision::moments::<D2Q9, f64>(&f);
        let (nx, ny, _) = crate::boundary::Orientation::Back.normal();
        let normal_velocity = m.u * nx + m.v * ny;
        assert!(normal_velocity.abs() < 1e-12, "normal_velocity={normal_velocity}");
    }

    #[test]
    fn moving_wall_imparts_velocity_tangential_to_the_wall_only() {
        let shape = Shape::new(3, 3, 1, 1);
        let mut pop: Population<D2Q9, f64> = Population::new(shape);
        pop.initialise_equilibrium(0, 1.0, 0.0, 0.0, 0.0);
        let bb = Bounceback;
        let values = crate::boundary::MacroscopicValues {
            rho: None,
            u: 0.05,
            v: 0.0,
            w: 0.0,
        };
        let elements = vec![BoundaryElement {
            x: 1,
            y: 0,
            z: 0,
            orientation: crate::boundary::Orientation::Back,
            values,
        }];
        BoundaryCondition::<D2Q9, f64>::after_collision(&bb, &mut pop, Timestep::Odd, &elements);

        let mut f = vec![0.0f64; D2Q9::ND];
        pop.read_cell::<Odd>(1, 0, 0, 0, &mut f);
        let m = crate::collision::moments::<D2Q9, f64>(&f);
        let (nx, ny, _) = crate::boundary::Orientation::Back.normal();
        let normal_velocity = m.u * nx + m.v * ny;
        assert!(normal_velocity.abs() < 1e-12, "normal_velocity={normal_velocity}");
        assert!(m.u.abs() > 1e-6, "expected the moving-wall bias along x, got u={}", m.u);
    }

    /// A non-uniform field makes the two direction slots of a mirrored pair
    /// genuinely different, so reading the wrong timestep phase (or
    /// clobbering one slot before reading the other) would be caught here.
    #[test]
    fn reflects_between_neighbour_cells_with_distinct_populations() {
        let shape = Shape::new(5, 5, 1, 1);
        let mut pop: Population<D2Q9, f64> = Population::new(shape);

        // raw(1, 2, 0, n=0, d=1) = 0.42
        pop.write::<Odd>(1, 2, 0, 1, 1, 0, 0.42);
        // raw(3, 2, 0, n=1, d=1) = 0.17
        pop.write::<Odd>(3, 2, 0, 0, 1, 0, 0.17);

        let bb = Bounceback;
        let elements = vec![BoundaryElement {
            x: 2,
            y: 2,
            z: 0,
            orientation: crate::boundary::Orientation::Back,
            values: Default::default(),
        }];
        BoundaryCondition::<D2Q9, f64>::after_collision(&bb, &mut pop, Timestep::Even, &elements);

        // A stationary wall (default values) applies zero correction, so the
        // reflection is an exact swap between the two neighbours' slots.
        let moved_to_left = pop.read::<Even>(1, 2, 0, 1, 1, 0);
        let moved_to_right = pop.read::<Even>(3, 2, 0, 0, 1, 0);
        assert!((moved_to_left - 0.17).abs() < 1e-12, "got {moved_to_left}");
        assert!((moved_to_right - 0.42).abs() < 1e-12, "got {moved_to_right}");
    }
}
