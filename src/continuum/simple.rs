//! A dense, directly-indexed [`Continuum`] implementation holding pressure
//! and velocity fields plus CSV/VTK export, adapted from the teacher's
//! `solver/output.rs` (vorticity, Q-criterion and both file formats kept
//! byte-for-byte).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::Continuum;

pub struct SimpleContinuum {
    nx: usize,
    ny: usize,
    nz: usize,
    rho: Vec<f64>,
    ux: Vec<f64>,
    uy: Vec<f64>,
    uz: Vec<f64>,
    pub output_dir: PathBuf,
    pub write_csv: bool,
    pub write_vtk: bool,
}

impl SimpleContinuum {
    pub fn new(nx: usize, ny: usize, nz: usize, output_dir: impl Into<PathBuf>) -> Self {
        let n = nx * ny * nz;
        SimpleContinuum {
            nx,
            ny,
            nz,
            rho: vec![0.0; n],
            ux: vec![0.0; n],
            uy: vec![0.0; n],
            uz: vec![0.0; n],
            output_dir: output_dir.into(),
            write_csv: true,
            write_vtk: false,
        }
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.ny + y) * self.nx + x
    }

    fn get(&self, field: &[f64], x: i64, y: i64, z: i64) -> f64 {
        let clamp = |v: i64, max: usize| v.clamp(0, max as i64 - 1) as usize;
        let idx = self.index(clamp(x, self.nx), clamp(y, self.ny), clamp(z, self.nz));
        field[idx]
    }

    pub fn vorticity_vector(&self, x: usize, y: usize, z: usize) -> (f64, f64, f64) {
        let (xi, yi, zi) = (x as i64, y as i64, z as i64);
        let duy_dx = (self.get(&self.uy, xi + 1, yi, zi) - self.get(&self.uy, xi - 1, yi, zi)) / 2.0;
        let duz_dx = (self.get(&self.uz, xi + 1, yi, zi) - self.get(&self.uz, xi - 1, yi, zi)) / 2.0;
        let dux_dy = (self.get(&self.ux, xi, yi + 1, zi) - self.get(&self.ux, xi, yi - 1, zi)) / 2.0;
        let duz_dy = (self.get(&self.uz, xi, yi + 1, zi) - self.get(&self.uz, xi, yi - 1, zi)) / 2.0;
        let dux_dz = (self.get(&self.ux, xi, yi, zi + 1) - self.get(&self.ux, xi, yi, zi - 1)) / 2.0;
        let duy_dz = (self.get(&self.uy, xi, yi, zi + 1) - self.get(&self.uy, xi, yi, zi - 1)) / 2.0;
        (duz_dy - duy_dz, dux_dz - duz_dx, duy_dx - dux_dy)
    }

    pub fn vorticity(&self, x: usize, y: usize, z: usize) -> f64 {
        let (wx, wy, wz) = self.vorticity_vector(x, y, z);
        (wx * wx + wy * wy + wz * wz).sqrt()
    }

    /// Q-criterion: half the difference between the squared norms of the
    /// rotation-rate and strain-rate tensors.
    pub fn q_criterion(&self, x: usize, y: usize, z: usize) -> f64 {
        let (xi, yi, zi) = (x as i64, y as i64, z as i64);
        let dux_dx = (self.get(&self.ux, xi + 1, yi, zi) - self.get(&self.ux, xi - 1, yi, zi)) / 2.0;
        let duy_dy = (self.get(&self.uy, xi, yi + 1, zi) - self.get(&self.uy, xi, yi - 1, zi)) / 2.0;
        let duz_dz = (self.get(&self.uz, xi, yi, zi + 1) - self.get(&self.uz, xi, yi, zi - 1)) / 2.0;
        let duy_dx = (self.get(&self.uy, xi + 1, yi, zi) - self.get(&self.uy, xi - 1, yi, zi)) / 2.0;
        let dux_dy = (self.get(&self.ux, xi, yi + 1, zi) - self.get(&self.ux, xi, yi - 1, zi)) / 2.0;
        let duz_dx = (self.get(&self.uz, xi + 1, yi, zi) - self.get(&self.uz, xi - 1, yi, zi)) / 2.0;
        let dux_dz = (self.get(&self.ux, xi, yi, zi + 1) - self.get(&self.ux, xi, yi, zi - 1)) / 2.0;
        let duz_dy = (self.get(&self.uz, xi, yi + 1, zi) - self.get(&self.uz, xi, yi - 1, zi)) / 2.0;
        let duy_dz = (self.get(&self.uy, xi, yi, zi + 1) - self.get(&self.uy, xi, yi, zi - 1)) / 2.0;

        let s_xx = dux_dx;
        let s_yy = duy_dy;
        let s_zz = duz_dz;
        let s_xy = 0.5 * (duy_dx + dux_dy);
        let s_xz = 0.5 * (duz_dx + dux_dz);
        let s_yz = 0.5 * (duz_dy + duy_dz);
        let s_norm = s_xx * s_xx + s_yy * s_yy + s_zz * s_zz
            + 2.0 * s_xy * s_xy
            + 2.0 * s_xz * s_xz
            + 2.0 * s_yz * s_yz;

        let w_xy = 0.5 * (duy_dx - dux_dy);
        let w_xz = 0.5 * (duz_dx - dux_dz);
        let w_yz = 0.5 * (duz_dy - duy_dz);
        let w_norm = 2.0 * w_xy * w_xy + 2.0 * w_xz * w_xz + 2.0 * w_yz * w_yz;

        0.5 * (w_norm - s_norm)
    }

    pub fn write_csv_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        writeln!(w, "x, y, z, rho,      ux,       uy,       uz,       v,       q")?;
        for z in 0..self.nz {
            for y in 0..self.ny {
                for x in 0..self.nx {
                    let idx = self.index(x, y, z);
                    writeln!(
                        w,
                        "{x}, {y}, {z}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}",
                        self.rho[idx],
                        self.ux[idx],
                        self.uy[idx],
                        self.uz[idx],
                        self.vorticity(x, y, z),
                        self.q_criterion(x, y, z),
                    )?;
                }
            }
        }
        Ok(())
    }

    pub fn write_vtk_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        writeln!(w, "# vtk DataFile Version 3.0")?;
        writeln!(w, "LatteLab Simulation Output")?;
        writeln!(w, "ASCII")?;
        writeln!(w, "DATASET STRUCTURED_POINTS")?;
        writeln!(w, "DIMENSIONS {} {} {}", self.nx, self.ny, self.nz)?;
        writeln!(w, "ORIGIN 0 0 0")?;
        writeln!(w, "SPACING 1 1 1")?;
        let total = self.nx * self.ny * self.nz;
        writeln!(w, "POINT_DATA {total}")?;

        writeln!(w, "SCALARS density float")?;
        writeln!(w, "LOOKUP_TABLE default")?;
        for &r in &self.rho {
            writeln!(w, "{:.6}", r)?;
        }

        writeln!(w, "VECTORS velocity float")?;
        for i in 0..total {
            writeln!(w, "{:.6} {:.6} {:.6}", self.ux[i], self.uy[i], self.uz[i])?;
        }

        writeln!(w, "SCALARS q_criterion float")?;
        writeln!(w, "LOOKUP_TABLE default")?;
        for z in 0..self.nz {
            for y in 0..self.ny {
                for x in 0..self.nx {
                    writeln!(w, "{:.6}", self.q_criterion(x, y, z))?;
                }
            }
        }

        writeln!(w, "VECTORS vorticity float")?;
        for z in 0..self.nz {
            for y in 0..self.ny {
                for x in 0..self.nx {
                    let (wx, wy, wz) = self.vorticity_vector(x, y, z);
                    writeln!(w, "{:.6} {:.6} {:.6}", wx, wy, wz)?;
                }
            }
        }
        Ok(())
    }
}

impl Continuum for SimpleContinuum {
    fn set_p(&mut self, x: usize, y: usize, z: usize, value: f64) {
        let idx = self.index(x, y, z);
        self.rho[idx] = value;
    }

    fn set_u(&mut self, x: usize, y: usize, z: usize, value: f64) {
        let idx = self.index(x, y, z);
        self.ux[idx] = value;
    }

    fn set_v(&mut self, x: usize, y: usize, z: usize, value: f64) {
        let idx = self.index(x, y, z);
        self.uy[idx] = value;
    }

    fn set_w(&mut self, x: usize, y: usize, z: usize, value: f64) {
        let idx = self.index(x, y, z);
        self.uz[idx] = value;
    }

    fn save(&mut self, timestamp: u64) -> std::io::Result<()> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir)?;
        }
        if self.write_csv {
            let path = self.output_dir.join(format!("data_{timestamp:08}.csv"));
            self.write_csv_to(&path)?;
        }
        if self.write_vtk {
            let path = self.output_dir.join(format!("data_{timestamp:08}.vtk"));
            self.write_vtk_to(&path)?;
        }
        Ok(())
    }
}
