//! The collide-stream driver: for every cell, gather its pre-collision
//! populations, relax them, and scatter the result back through the A-A
//! addressing rules. Grounded on `collision.hpp`'s block decomposition
//! (`BLOCK_SIZE_ = 32`), reimplemented over rayon instead of an OpenMP
//! `#pragma parallel for` / OpenCL work-group grid.

use rayon::prelude::*;

use crate::collision::{moments, CollisionOperator};
use crate::lattice::Lattice;
use crate::population::aa::Phase;
use crate::population::{LatticeFloat, Population};
use crate::threadpool::SolverThreadPool;

/// Default block width along `x`, matching the teacher's tiling granularity.
pub const BLOCK_SIZE: usize = 32;

/// Runs one collide-stream half-step over every cell of population `p`.
///
/// # Safety and parallelism
/// The A-A read/write addressing is a bijection over `(cell, n, d)` for a
/// fixed parity: every direction slot a cell reads comes from exactly one
/// source address, and every slot it writes lands at exactly one
/// destination address, with no two `(cell, n, d)` triples sharing a
/// destination. Partitioning the domain into disjoint `x`-blocks and
/// processing each block's cells independently therefore never causes two
/// blocks to write the same address, even though a block may write into a
/// neighbouring block's cells near its boundary — it is this bijection,
/// not spatial locality, that makes the raw pointer writes below race-free.
pub fn collide_stream<P, L, T>(
    pool: &SolverThreadPool,
    pop: &mut Population<L, T>,
    op: &dyn CollisionOperator<L, T>,
    p: usize,
) where
    P: Phase,
    L: Lattice,
    T: LatticeFloat,
{
    let shape = *pop.shape();
    let nx = shape.nx;
    let n_blocks = nx.div_ceil(BLOCK_SIZE);

    // Raw pointer into the population's storage, shared read/write across
    // blocks. Each block only ever touches addresses assigned to it by the
    // bijection argument above.
    let raw = RawPop { pop: pop as *mut Population<L, T> };

    pool.install(|| {
        (0..n_blocks).into_par_iter().for_each(|b| {
            let x0 = b * BLOCK_SIZE;
            let x1 = (x0 + BLOCK_SIZE).min(nx);
            // Safety: see function-level safety comment; `raw` only ever
            // aliases disjoint destination slots across concurrent blocks.
            let pop = unsafe { &mut *raw.pop };
            let mut f = vec![T::zero(); L::ND];
            for z in 0..shape.nz {
                for y in 0..shape.ny {
                    for x in x0..x1 {
                        pop.read_cell::<P>(x, y, z, p, &mut f);
                        let m = moments::<L, T>(&f);
                        op.relax(&mut f, &m);
                        pop.write_cell::<P>(x, y, z, p, &f);
                    }
                }
            }
        });
    });
}

struct RawPop<L: Lattice, T: LatticeFloat> {
    pop: *mut Population<L, T>,
}
unsafe impl<L: Lattice, T: LatticeFloat> Sync for RawPop<L, T> {}
unsafe impl<L: Lattice, T: LatticeFloat> Send for RawPop<L, T> {}
