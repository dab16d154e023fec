//! Linear addressing for a flattened, merged population grid.
//!
//! Layout matches the row-major order a CPU prefers: `x` fastest, then `y`,
//! then `z`, then the population index `p`, then the direction slot `n*OFF+d`.
//! Grounded on `indexing.hpp`'s `spatialToLinear`/`linearToSpatial` pair.

use crate::lattice::Lattice;

/// Domain resolution plus the number of populations merged side by side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub np: usize,
}

impl Shape {
    pub fn new(nx: usize, ny: usize, nz: usize, np: usize) -> Self {
        Shape { nx, ny, nz, np }
    }

    pub fn cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Number of `f64`/`f32` slots a single-phase buffer needs for lattice `L`.
    pub fn buffer_len<L: Lattice>(&self) -> usize {
        self.cells() * self.np * L::ND
    }

    /// `linear(x, y, z, n, d, p) = (((z*NY+y)*NX+x)*NP+p)*ND + n*OFF + d`
    #[inline(always)]
    pub fn linear<L: Lattice>(&self, x: usize, y: usize, z: usize, n: usize, d: usize, p: usize) -> usize {
        debug_assert!(x < self.nx && y < self.ny && z < self.nz && p < self.np);
        debug_assert!(n < 2 && d < L::OFF);
        (((z * self.ny + y) * self.nx + x) * self.np + p) * L::ND + n * L::OFF + d
    }

    /// Inverse of [`Shape::linear`], recovering `(x, y, z, p)` from a cell index
    /// (the `*ND + n*OFF + d` remainder is stripped by the caller beforehand).
    pub fn spatial_of(&self, cell: usize) -> (usize, usize, usize, usize) {
        let p = cell % self.np;
        let rest = cell / self.np;
        let x = rest % self.nx;
        let rest = rest / self.nx;
        let y = rest % self.ny;
        let z = rest / self.ny;
        (x, y, z, p)
    }

    /// Periodic neighbour of `(x, y, z)` displaced by lattice vector `(vx, vy, vz)`.
    #[inline(always)]
    pub fn wrap(&self, x: usize, y: usize, z: usize, vx: f64, vy: f64, vz: f64) -> (usize, usize, usize) {
        let xn = wrap_axis(x, vx, self.nx);
        let yn = wrap_axis(y, vy, self.ny);
        let zn = wrap_axis(z, vz, self.nz);
        (xn, yn, zn)
    }
}

#[inline(always)]
fn wrap_axis(x: usize, v: f64, n: usize) -> usize {
    let n = n as i64;
    let shifted = x as i64 + v as i64;
    (((shifted % n) + n) % n) as usize
}
