//! LatteLab: a CPU lattice-Boltzmann fluid solver built around the A-A
//! (Bailey et al. 2009) in-place streaming pattern.
//!
//! The crate is organised the way the kernel is executed: a [`lattice`]
//! descriptor picks the velocity set, a [`population`] buffer stores
//! distribution functions in A-A layout, [`collision`] operators relax them
//! towards equilibrium, [`boundary`] conditions correct cells on the domain
//! faces, and [`driver`] fans the whole collide-stream sweep out over a
//! [`threadpool`]. [`timestep`] assembles those pieces from [`config`]
//! settings into a runnable [`timestep::LbmSolver`].

pub mod boundary;
pub mod cli;
pub mod collision;
pub mod config;
pub mod continuum;
pub mod driver;
pub mod error;
pub mod lattice;
pub mod population;
pub mod solver;
pub mod threadpool;
pub mod timestep;
pub mod utils;
