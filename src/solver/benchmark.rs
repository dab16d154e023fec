//! Benchmark sweep across lattices, grid sizes and collision operators.
//!
//! Grounded on the teacher's `solver/benchmark.rs` (`BenchmarkResult`,
//! grid/model sweep, grouped CSV summary) with the OpenCL device-info query
//! and kernel enqueue loop replaced by building a [`LbmSolver`] per
//! configuration and timing [`LbmSolver::bench`] over the rayon thread pool.

use std::fs;
use std::fs::File;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{CollisionKindSetting, Settings};
use crate::error::LbmError;
use crate::timestep::build_solver;
use crate::utils::terminal_utils;

#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub model: String,
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub grid_size: usize,
    pub time_steps: u64,
    pub elapsed_time: f64,
    pub mlups: f64,
    pub num_threads: usize,
}

#[derive(Debug, Clone)]
struct BenchmarkConfig {
    model: String,
    nx: usize,
    ny: usize,
    nz: usize,
    time_steps: u64,
    viscosity: f64,
}

/// Runs the full benchmark suite: every lattice model across a handful of
/// grid sizes, writing a timestamped CSV summary to `benchmarks/`.
pub fn run() -> Result<(), LbmError> {
    println!("{}", "=".repeat(80));
    terminal_utils::print_success("Starting LatteLab Benchmark Suite");
    println!("{}", "=".repeat(80));

    let configs = benchmark_configs();
    let total = configs.len();
    println!("Running {total} benchmark configurations...\n");

    let mut results = Vec::new();
    for (i, config) in configs.iter().enumerate() {
        println!(
            "Progress: [{}/{total}] Testing {} {}x{}x{}",
            i + 1,
            config.model,
            config.nx,
            config.ny,
            config.nz
        );
        match run_single(config) {
            Ok(result) => {
                print_result(&result);
                results.push(result);
            }
            Err(e) => {
                terminal_utils::print_error(&format!(
                    "Failed to run benchmark for {} {}x{}x{}: {e}",
                    config.model, config.nx, config.ny, config.nz
                ));
            }
        }
        println!("{}", "-".repeat(80));
    }

    match save_results_to_csv(&results) {
        Ok(filename) => terminal_utils::print_success(&format!("Benchmark results saved to: {filename}")),
        Err(e) => terminal_utils::print_error(&format!("Failed to save CSV: {e}")),
    }

    print_summary(&results);
    Ok(())
}

fn benchmark_configs() -> Vec<BenchmarkConfig> {
    let mut configs = Vec::new();

    for (nx, ny) in [(64, 64), (128, 128), (256, 256)] {
        configs.push(BenchmarkConfig {
            model: "D2Q9".to_string(),
            nx,
            ny,
            nz: 1,
            time_steps: 500,
            viscosity: 0.1,
        });
    }

    for model in ["D3Q15", "D3Q19", "D3Q27", "D3Q27Cache"] {
        for side in [32, 64, 100] {
            configs.push(BenchmarkConfig {
                model: model.to_string(),
                nx: side,
                ny: side,
                nz: side,
                time_steps: 250,
                viscosity: 0.1,
            });
        }
    }

    configs
}

fn run_single(config: &BenchmarkConfig) -> Result<BenchmarkResult, LbmError> {
    let settings = Settings {
        model: config.model.clone(),
        nx: config.nx,
        ny: config.ny,
        nz: config.nz,
        np: 1,
        viscosity: config.viscosity,
        reynolds: None,
        characteristic_velocity: None,
        characteristic_length: None,
        collision: CollisionKindSetting::Bgk,
        initial_u: 0.0,
        initial_v: 0.0,
        initial_w: 0.0,
        boundaries: Vec::new(),
        time_steps: config.time_steps,
        output_interval: 0,
        output_csv: false,
        output_vtk: false,
        num_threads: None,
    };

    let mut solver = build_solver(&settings)?;
    let (elapsed_time, mlups) = solver.bench(config.time_steps);

    Ok(BenchmarkResult {
        model: config.model.clone(),
        nx: config.nx,
        ny: config.ny,
        nz: config.nz,
        grid_size: config.nx * config.ny * config.nz,
        time_steps: config.time_steps,
        elapsed_time,
        mlups,
        num_threads: crate::threadpool::SolverThreadPool::max_threads(),
    })
}

fn print_result(result: &BenchmarkResult) {
    println!("  Model: {}", result.model);
    println!(
        "  Grid: {}x{}x{} ({} cells)",
        result.nx, result.ny, result.nz, result.grid_size
    );
    println!("  Time steps: {}", result.time_steps);
    println!("  Elapsed time: {:.3}s", result.elapsed_time);
    println!("  Performance: {:.2} MLUps", result.mlups);
    println!("  Threads: {}", result.num_threads);
}

fn save_results_to_csv(results: &[BenchmarkResult]) -> Result<String, LbmError> {
    let benchmarks_dir = "benchmarks";
    fs::create_dir_all(benchmarks_dir)?;

    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
    let filename = format!("{benchmarks_dir}/benchmark_results_{timestamp}.csv");

    let mut file = File::create(&filename)?;
    writeln!(file, "Model,Nx,Ny,Nz,GridSize,TimeSteps,ElapsedTime,MLUps,Threads")?;
    for result in results {
        writeln!(
            file,
            "{},{},{},{},{},{},{:.6},{:.6},{}",
            result.model,
            result.nx,
            result.ny,
            result.nz,
            result.grid_size,
            result.time_steps,
            result.elapsed_time,
            result.mlups,
            result.num_threads
        )?;
    }
    Ok(filename)
}

fn print_summary(results: &[BenchmarkResult]) {
    if results.is_empty() {
        return;
    }

    println!("\n{}", "=".repeat(80));
    terminal_utils::print_success("Benchmark Summary");
    println!("{}", "=".repeat(80));

    let mut model_results: std::collections::HashMap<String, Vec<&BenchmarkResult>> = std::collections::HashMap::new();
    for result in results {
        model_results.entry(result.model.clone()).or_default().push(result);
    }

    println!("Performance by model:");
    for (model, model_res) in &model_results {
        let max_mlups = model_res.iter().map(|r| r.mlups).fold(0.0f64, f64::max);
        let avg_mlups = model_res.iter().map(|r| r.mlups).sum::<f64>() / model_res.len() as f64;
        let best = model_res.iter().max_by(|a, b| a.mlups.partial_cmp(&b.mlups).unwrap()).unwrap();
        println!(
            "  {model}: Max {max_mlups:.2} MLUps ({}x{}x{}), Avg {avg_mlups:.2} MLUps ({} configs)",
            best.nx,
            best.ny,
            best.nz,
            model_res.len()
        );
    }

    if let Some(best) = results.iter().max_by(|a, b| a.mlups.partial_cmp(&b.mlups).unwrap()) {
        println!("\nOverall best performance:");
        println!("  {}: {:.2} MLUps ({}x{}x{})", best.model, best.mlups, best.nx, best.ny, best.nz);
    }

    let total_mlups: f64 = results.iter().map(|r| r.mlups).sum();
    println!("\nOverall statistics:");
    println!("  Total configurations tested: {}", results.len());
    println!("  Average performance: {:.2} MLUps", total_mlups / results.len() as f64);
    println!("{}", "=".repeat(80));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_configuration_runs_and_reports_positive_throughput() {
        let config = BenchmarkConfig {
            model: "D2Q9".to_string(),
            nx: 8,
            ny: 8,
            nz: 1,
            time_steps: 4,
            viscosity: 0.1,
        };
        let result = run_single(&config).unwrap();
        assert_eq!(result.grid_size, 64);
        assert!(result.mlups > 0.0);
    }

    #[test]
    fn benchmark_configs_cover_every_lattice_model() {
        let configs = benchmark_configs();
        let models: std::collections::HashSet<&str> = configs.iter().map(|c| c.model.as_str()).collect();
        for expected in ["D2Q9", "D3Q15", "D3Q19", "D3Q27", "D3Q27Cache"] {
            assert!(models.contains(expected), "missing {expected}");
        }
    }
}
