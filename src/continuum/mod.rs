//! Macroscopic field storage and export, decoupled from the population
//! buffer so output can be produced without re-deriving moments from scratch
//! every write. Grounded on `simple_continuum.hpp`'s constructor/accessor
//! surface.

pub mod simple;

pub use simple::SimpleContinuum;

/// Macroscopic field storage a solver writes moments into once per reported
/// time step and can be asked to persist to disk.
pub trait Continuum {
    fn set_p(&mut self, x: usize, y: usize, z: usize, value: f64);
    fn set_u(&mut self, x: usize, y: usize, z: usize, value: f64);
    fn set_v(&mut self, x: usize, y: usize, z: usize, value: f64);
    fn set_w(&mut self, x: usize, y: usize, z: usize, value: f64);
    fn save(&mut self, timestamp: u64) -> std::io::Result<()>;
}
