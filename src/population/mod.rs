//! Merged population storage: one flat, aligned buffer per population holding
//! every direction slot of every cell, addressed through the A-A pattern.
//! Grounded on `population.hpp` (storage shape, constructor) combined with
//! the teacher's `solver/lbm.rs` initialisation style.

pub mod aa;
pub mod aligned;
pub mod indexing;

use aa::{index_read, index_write, Phase};
use aligned::AlignedBuffer;
use indexing::Shape;
use num_traits::Float;

use crate::lattice::Lattice;

/// Floating-point type a population buffer can be built over. `f32` and
/// `f64` both satisfy `num_traits::Float`; collision and boundary code is
/// written generically against this bound rather than hardcoding `f64`.
pub trait LatticeFloat: Float + Default + Copy + Send + Sync + 'static {}
impl LatticeFloat for f32 {}
impl LatticeFloat for f64 {}

/// One merged population grid: `np` populations of lattice `L`, each cell
/// holding `L::ND` direction slots (including padding).
pub struct Population<L: Lattice, T: LatticeFloat> {
    shape: Shape,
    data: AlignedBuffer<T>,
    _lattice: std::marker::PhantomData<L>,
}

impl<L: Lattice, T: LatticeFloat> Population<L, T> {
    pub fn new(shape: Shape) -> Self {
        let len = shape.buffer_len::<L>();
        Population {
            shape,
            data: AlignedBuffer::new_zeroed(len),
            _lattice: std::marker::PhantomData,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline(always)]
    pub fn read<P: Phase>(&self, x: usize, y: usize, z: usize, n: usize, d: usize, p: usize) -> T {
        let idx = index_read::<P, L>(&self.shape, x, y, z, n, d, p);
        self.data[idx]
    }

    #[inline(always)]
    pub fn write<P: Phase>(&mut self, x: usize, y: usize, z: usize, n: usize, d: usize, p: usize, value: T) {
        let idx = index_write::<P, L>(&self.shape, x, y, z, n, d, p);
        self.data[idx] = value;
    }

    /// Reads every direction slot of cell `(x, y, z)`'s population `p` into
    /// a fixed-size scratch array sized for `L::ND`, for the collision
    /// kernel to consume without per-direction bounds checks.
    #[inline(always)]
    pub fn read_cell<P: Phase>(&self, x: usize, y: usize, z: usize, p: usize, out: &mut [T]) {
        debug_assert_eq!(out.len(), L::ND);
        for n in 0..2 {
            for d in 0..L::OFF {
                out[n * L::OFF + d] = self.read::<P>(x, y, z, n, d, p);
            }
        }
    }

    #[inline(always)]
    pub fn write_cell<P: Phase>(&mut self, x: usize, y: usize, z: usize, p: usize, values: &[T]) {
        debug_assert_eq!(values.len(), L::ND);
        for n in 0..2 {
            for d in 0..L::OFF {
                self.write::<P>(x, y, z, n, d, p, values[n * L::OFF + d]);
            }
        }
    }

    /// Initialises every direction slot of population `p` to its equilibrium
    /// value for a uniform density/velocity field, writing each slot `(n, d)`
    /// to the address the very first `Even` step will read it back from
    /// (`index_read::<Even>`, i.e. the `!n` half of the same cell) rather
    /// than to its own `(n, d)` slot. For a rest field the two coincide by
    /// symmetry, but for a nonzero velocity the equilibrium of a direction
    /// and its mirror differ, so writing to the wrong half would hand the
    /// first collide-stream step someone else's population.
    pub fn initialise_equilibrium(&mut self, p: usize, rho: T, u: T, v: T, w: T) {
        let cs2 = T::from(L::CS2).unwrap();
        let two = T::from(2.0).unwrap();
        let half = T::one() / two;
        for z in 0..self.shape.nz {
            for y in 0..self.shape.ny {
                for x in 0..self.shape.nx {
                    for n in 0..2 {
                        for d in 0..L::OFF {
                            let k = n * L::OFF + d;
                            let wk = T::from(L::w()[k]).unwrap();
                            let mk = T::from(L::mask()[k]).unwrap();
                            let dxk = T::from(L::dx()[k]).unwrap();
                            let dyk = T::from(L::dy()[k]).unwrap();
                            let dzk = T::from(L::dz()[k]).unwrap();
                            let cu = (u * dxk + v * dyk + w * dzk) / cs2;
                            let uu = -(u * u + v * v + w * w) / (two * cs2);
                            let feq = wk * (rho + rho * (cu * (T::one() + cu * half) + uu));
                            let idx = self.shape.linear::<L>(x, y, z, 1 - n, d, p);
                            self.data[idx] = mk * feq;
                        }
                    }
                }
            }
        }
    }

    /// Like [`Population::initialise_equilibrium`] but the density is taken
    /// per cell from `rho_at(x, y, z)` instead of a single uniform value,
    /// with velocity held uniform. Used to seed spatially varying initial
    /// fields (a sinusoidal perturbation, say) that a single scalar `rho`
    /// cannot express.
    pub fn initialise_equilibrium_with(&mut self, p: usize, u: T, v: T, w: T, rho_at: impl Fn(usize, usize, usize) -> T) {
        let cs2 = T::from(L::CS2).unwrap();
        let two = T::from(2.0).unwrap();
        let half = T::one() / two;
        let uu = -(u * u + v * v + w * w) / (two * cs2);
        for z in 0..self.shape.nz {
            for y in 0..self.shape.ny {
                for x in 0..self.shape.nx {
                    let rho = rho_at(x, y, z);
                    for n in 0..2 {
                        for d in 0..L::OFF {
                            let k = n * L::OFF + d;
                            let wk = T::from(L::w()[k]).unwrap();
                            let mk = T::from(L::mask()[k]).unwrap();
                            let dxk = T::from(L::dx()[k]).unwrap();
                            let dyk = T::from(L::dy()[k]).unwrap();
                            let dzk = T::from(L::dz()[k]).unwrap();
                            let cu = (u * dxk + v * dyk + w * dzk) / cs2;
                            let feq = wk * (rho + rho * (cu * (T::one() + cu * half) + uu));
                            let idx = self.shape.linear::<L>(x, y, z, 1 - n, d, p);
                            self.data[idx] = mk * feq;
                        }
                    }
                }
            }
        }
    }
}
