//! Solver orchestration: builds a population/continuum pair from validated
//! settings and drives the time-step loop. Grounded on `solver/run.rs`'s
//! banner -> progress bar -> timed loop -> metrics structure.

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use crate::boundary::{face_elements, BoundaryCondition, BoundaryElement, Bounceback, Guo, GuoKind, MacroscopicValues};
use crate::collision::{Bgk, CollisionOperator, Smagorinsky, Trt};
use crate::config::{BoundaryKindSetting, CollisionKindSetting, Settings};
use crate::continuum::{Continuum, SimpleContinuum};
use crate::driver::collide_stream;
use crate::error::LbmError;
use crate::lattice::{Lattice, D2Q9, D3Q15, D3Q19, D3Q27, D3Q27Cache};
use crate::population::aa::{Even, Odd, Timestep};
use crate::population::indexing::Shape;
use crate::population::{LatticeFloat, Population};
use crate::threadpool::SolverThreadPool;
use crate::utils::terminal_utils::{print_metrics, print_welcome_message};

/// A boundary condition together with the elements it applies to.
pub struct BoundaryRule<L: Lattice, T: LatticeFloat> {
    pub condition: Box<dyn BoundaryCondition<L, T>>,
    pub elements: Vec<BoundaryElement<T>>,
}

/// A fully assembled solver for one concrete lattice/float combination.
pub struct LbmSolver<L: Lattice, T: LatticeFloat> {
    pop: Population<L, T>,
    operator: Box<dyn CollisionOperator<L, T>>,
    boundaries: Vec<BoundaryRule<L, T>>,
    continuum: SimpleContinuum,
    pool: SolverThreadPool,
    parity: Timestep,
    time_steps: u64,
    output_interval: usize,
}

impl<L: Lattice, T: LatticeFloat> LbmSolver<L, T> {
    pub fn new(settings: &Settings) -> Result<Self, LbmError> {
        let shape = Shape::new(settings.nx, settings.ny, settings.nz, settings.np);
        let mut pop = Population::new(shape);
        let rho = T::one();
        let u0 = T::from(settings.initial_u).unwrap();
        let v0 = T::from(settings.initial_v).unwrap();
        let w0 = T::from(settings.initial_w).unwrap();
        pop.initialise_equilibrium(0, rho, u0, v0, w0);

        let tau = T::from(settings.tau(L::CS2)).unwrap();
        let operator: Box<dyn CollisionOperator<L, T>> = match &settings.collision {
            CollisionKindSetting::Bgk => Box::new(Bgk::from_tau(tau)),
            CollisionKindSetting::Smagorinsky { constant } => match constant {
                Some(c) => Box::new(Smagorinsky::with_constant(tau, T::from(*c).unwrap())) as Box<dyn CollisionOperator<L, T>>,
                None => Box::new(Smagorinsky::new(tau)) as Box<dyn CollisionOperator<L, T>>,
            },
            CollisionKindSetting::Trt { lambda } => {
                let lambda = T::from(lambda.unwrap_or(crate::collision::trt::LAMBDA_DEFAULT)).unwrap();
                Box::new(Trt::from_tau(tau, lambda)) as Box<dyn CollisionOperator<L, T>>
            }
        };

        let num_threads = settings.num_threads.unwrap_or_else(SolverThreadPool::max_threads);
        let pool = SolverThreadPool::new(num_threads)?;

        let mut continuum = SimpleContinuum::new(settings.nx, settings.ny, settings.nz, "output");
        continuum.write_csv = settings.output_csv;
        continuum.write_vtk = settings.output_vtk;

        let mut boundaries = Vec::new();
        for b in &settings.boundaries {
            if b.kind == BoundaryKindSetting::Periodic {
                continue;
            }
            let orientation: crate::boundary::Orientation = b.orientation.into();
            let values = MacroscopicValues {
                rho: b.rho.map(|r| T::from(r).unwrap()),
                u: T::from(b.u).unwrap(),
                v: T::from(b.v).unwrap(),
                w: T::from(b.w).unwrap(),
            };
            let elements = face_elements::<T>(settings.nx, settings.ny, settings.nz, orientation, values);
            let condition: Box<dyn BoundaryCondition<L, T>> = match b.kind {
                BoundaryKindSetting::Bounceback => Box::new(Bounceback),
                BoundaryKindSetting::GuoVelocity => Box::new(Guo(GuoKind::Velocity)),
                BoundaryKindSetting::GuoPressure => Box::new(Guo(GuoKind::Pressure)),
                BoundaryKindSetting::Periodic => unreachable!(),
            };
            boundaries.push(BoundaryRule { condition, elements });
        }

        Ok(LbmSolver {
            pop,
            operator,
            boundaries,
            continuum,
            pool,
            parity: Timestep::Even,
            time_steps: settings.time_steps,
            output_interval: settings.output_interval,
        })
    }

    pub fn add_boundary_rule(&mut self, condition: Box<dyn BoundaryCondition<L, T>>, elements: Vec<BoundaryElement<T>>) {
        self.boundaries.push(BoundaryRule { condition, elements });
    }

    /// One collide-stream half-step plus any boundary corrections, then
    /// flips the stored parity for the next call.
    pub fn step(&mut self) {
        for rule in &self.boundaries {
            rule.condition.before_collision(&mut self.pop, self.parity, &rule.elements);
        }
        match self.parity {
            Timestep::Even => collide_stream::<Even, L, T>(&self.pool, &mut self.pop, self.operator.as_ref(), 0),
            Timestep::Odd => collide_stream::<Odd, L, T>(&self.pool, &mut self.pop, self.operator.as_ref(), 0),
        }
        for rule in &self.boundaries {
            rule.condition.after_collision(&mut self.pop, self.parity, &rule.elements);
        }
        self.parity = !self.parity;
    }

    fn write_continuum(&mut self, t: u64) -> Result<(), LbmError> {
        let shape = *self.pop.shape();
        let mut f = vec![T::zero(); L::ND];
        for z in 0..shape.nz {
            for y in 0..shape.ny {
                for x in 0..shape.nx {
                    match self.parity {
                        Timestep::Even => self.pop.read_cell::<Even>(x, y, z, 0, &mut f),
                        Timestep::Odd => self.pop.read_cell::<Odd>(x, y, z, 0, &mut f),
                    }
                    let m = crate::collision::moments::<L, T>(&f);
                    self.continuum.set_p(x, y, z, m.rho.to_f64().unwrap());
                    self.continuum.set_u(x, y, z, m.u.to_f64().unwrap());
                    self.continuum.set_v(x, y, z, m.v.to_f64().unwrap());
                    self.continuum.set_w(x, y, z, m.w.to_f64().unwrap());
                }
            }
        }
        self.continuum.save(t)?;
        Ok(())
    }

    pub fn run(&mut self) -> Result<(), LbmError> {
        print_welcome_message();
        let pb = ProgressBar::new(self.time_steps);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:55.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("=> "),
        );

        let start = Instant::now();
        for t in 0..self.time_steps {
            self.step();
            if self.output_interval > 0 && t as usize % self.output_interval == 0 {
                self.write_continuum(t)?;
            }
            pb.inc(1);
        }
        pb.finish_with_message("");

        let elapsed = start.elapsed().as_secs_f64();
        let cells = self.pop.shape().cells() as f64;
        let mlups = cells * self.time_steps as f64 / elapsed / 1.0e6;
        print_metrics(self.time_steps, elapsed, mlups);
        Ok(())
    }

    /// Runs `steps` collide-stream half-steps with no console output and no
    /// continuum export, returning `(elapsed_seconds, mlups)`. Used by the
    /// benchmark sweep, which reports its own aggregated summary instead.
    pub fn bench(&mut self, steps: u64) -> (f64, f64) {
        let start = Instant::now();
        for _ in 0..steps {
            self.step();
        }
        let elapsed = start.elapsed().as_secs_f64();
        let cells = self.pop.shape().cells() as f64;
        let mlups = cells * steps as f64 / elapsed / 1.0e6;
        (elapsed, mlups)
    }
}

/// Object-safe facade so `main`/the CLI can hold one of several concrete
/// `LbmSolver<L, T>` instantiations behind a single type, chosen at runtime
/// from the settings' `model` field.
pub trait StepRunner: Send {
    fn run(&mut self) -> Result<(), LbmError>;
    fn bench(&mut self, steps: u64) -> (f64, f64);
}

impl<L: Lattice, T: LatticeFloat> StepRunner for LbmSolver<L, T> {
    fn run(&mut self) -> Result<(), LbmError> {
        LbmSolver::run(self)
    }

    fn bench(&mut self, steps: u64) -> (f64, f64) {
        LbmSolver::bench(self, steps)
    }
}

/// Builds the concrete solver named by `settings.model`.
pub fn build_solver(settings: &Settings) -> Result<Box<dyn StepRunner>, LbmError> {
    match settings.model.as_str() {
        "D2Q9" => Ok(Box::new(LbmSolver::<D2Q9, f64>::new(settings)?)),
        "D3Q15" => Ok(Box::new(LbmSolver::<D3Q15, f64>::new(settings)?)),
        "D3Q19" => Ok(Box::new(LbmSolver::<D3Q19, f64>::new(settings)?)),
        "D3Q27" => Ok(Box::new(LbmSolver::<D3Q27, f64>::new(settings)?)),
        "D3Q27Cache" => Ok(Box::new(LbmSolver::<D3Q27Cache, f64>::new(settings)?)),
        other => Err(LbmError::UnsupportedModel(other.to_string())),
    }
}
