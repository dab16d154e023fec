//! Thread pool management, replacing `openmp_manager.hpp`'s
//! `setThreadsNum`/`getThreadsMax` singleton with an owned `rayon::ThreadPool`.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::LbmError;
use crate::utils::terminal_utils::print_warning;

/// Wraps a dedicated rayon thread pool so every parallel phase (collide-stream,
/// boundary application) runs through the same, explicitly sized pool instead
/// of rayon's implicit global one.
pub struct SolverThreadPool {
    pool: ThreadPool,
    num_threads: usize,
}

impl SolverThreadPool {
    /// Builds a pool sized to `requested`. Zero and over-hardware-max requests
    /// are not fatal: they are clamped to `max_threads()` and logged, matching
    /// the original's "rejected, default to hardware max" policy rather than
    /// aborting the run.
    pub fn new(requested: usize) -> Result<Self, LbmError> {
        let max = Self::max_threads();
        let num_threads = if requested == 0 || requested > max {
            print_warning(&LbmError::InvalidThreadCount(requested).to_string());
            max
        } else {
            requested
        };
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| LbmError::ThreadPoolBuild(e.to_string()))?;
        Ok(SolverThreadPool { pool, num_threads })
    }

    /// Builds a pool sized to the machine's available parallelism.
    pub fn new_default() -> Result<Self, LbmError> {
        Self::new(Self::max_threads())
    }

    pub fn max_threads() -> usize {
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Runs `f` inside this pool, as the fork-join barrier for one parallel
    /// phase of the solver.
    pub fn install<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        self.pool.install(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threads_clamps_to_hardware_max() {
        let pool = SolverThreadPool::new(0).unwrap();
        assert_eq!(pool.num_threads(), SolverThreadPool::max_threads());
    }

    #[test]
    fn over_large_request_clamps_to_hardware_max() {
        let huge = SolverThreadPool::max_threads() + 1000;
        let pool = SolverThreadPool::new(huge).unwrap();
        assert_eq!(pool.num_threads(), SolverThreadPool::max_threads());
    }

    #[test]
    fn pool_reports_the_thread_count_it_was_built_with() {
        let pool = SolverThreadPool::new(2).unwrap();
        assert_eq!(pool.num_threads(), 2);
    }

    #[test]
    fn default_pool_matches_available_parallelism() {
        let pool = SolverThreadPool::new_default().unwrap();
        assert_eq!(pool.num_threads(), SolverThreadPool::max_threads());
    }
}
