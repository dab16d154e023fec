//! Solver-level orchestration beyond a single run: the benchmark sweep.

pub mod benchmark;
