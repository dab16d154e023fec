//! JSON simulation settings, loaded once at startup and validated before a
//! solver is built from them. The teacher hardcodes these values per example
//! scenario; here they come from a user-supplied file instead.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LbmError;

const SUPPORTED_MODELS: [&str; 5] = ["D2Q9", "D3Q15", "D3Q19", "D3Q27", "D3Q27Cache"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub model: String,
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    #[serde(default = "default_np")]
    pub np: usize,
    pub viscosity: f64,
    /// Optional cross-check: if `reynolds`, `characteristic_velocity` and
    /// `characteristic_length` are all given, `validate` confirms they agree
    /// with `viscosity` via `Re = U*L/nu` instead of silently overriding it.
    #[serde(default)]
    pub reynolds: Option<f64>,
    #[serde(default)]
    pub characteristic_velocity: Option<f64>,
    #[serde(default)]
    pub characteristic_length: Option<f64>,
    #[serde(default)]
    pub collision: CollisionKindSetting,
    #[serde(default)]
    pub initial_u: f64,
    #[serde(default)]
    pub initial_v: f64,
    #[serde(default)]
    pub initial_w: f64,
    #[serde(default)]
    pub boundaries: Vec<BoundarySetting>,
    pub time_steps: u64,
    #[serde(default = "default_output_interval")]
    pub output_interval: usize,
    #[serde(default)]
    pub output_csv: bool,
    #[serde(default)]
    pub output_vtk: bool,
    #[serde(default)]
    pub num_threads: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CollisionKindSetting {
    Bgk,
    Smagorinsky {
        #[serde(default)]
        constant: Option<f64>,
    },
    Trt {
        #[serde(default)]
        lambda: Option<f64>,
    },
}

impl Default for CollisionKindSetting {
    fn default() -> Self {
        CollisionKindSetting::Bgk
    }
}

/// One face of the domain and the rule imposed there. `Periodic` is accepted
/// for documentation purposes but never produces a boundary rule: periodicity
/// is already the indexer's default neighbour arithmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundaryKindSetting {
    Bounceback,
    GuoVelocity,
    GuoPressure,
    Periodic,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrientationSetting {
    Left,
    Right,
    Front,
    Back,
    Bottom,
    Top,
}

impl From<OrientationSetting> for crate::boundary::Orientation {
    fn from(o: OrientationSetting) -> Self {
        use crate::boundary::Orientation as O;
        match o {
            OrientationSetting::Left => O::Left,
            OrientationSetting::Right => O::Right,
            OrientationSetting::Front => O::Front,
            OrientationSetting::Back => O::Back,
            OrientationSetting::Bottom => O::Bottom,
            OrientationSetting::Top => O::Top,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundarySetting {
    #[serde(flatten)]
    pub kind: BoundaryKindSetting,
    pub orientation: OrientationSetting,
    #[serde(default)]
    pub rho: Option<f64>,
    #[serde(default)]
    pub u: f64,
    #[serde(default)]
    pub v: f64,
    #[serde(default)]
    pub w: f64,
}

fn default_np() -> usize {
    1
}

fn default_output_interval() -> usize {
    100
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LbmError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|_| LbmError::SettingsNotFound(path.display().to_string()))?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), LbmError> {
        if self.nx == 0 || self.ny == 0 || self.nz == 0 {
            return Err(LbmError::InvalidConfig("nx, ny and nz must all be positive".into()));
        }
        if !SUPPORTED_MODELS.contains(&self.model.as_str()) {
            return Err(LbmError::UnsupportedModel(self.model.clone()));
        }
        if self.model == "D2Q9" && self.nz != 1 {
            return Err(LbmError::InvalidConfig("D2Q9 requires nz == 1".into()));
        }
        if self.viscosity <= 0.0 {
            return Err(LbmError::InvalidConfig("viscosity must be positive".into()));
        }
        if self.np == 0 {
            return Err(LbmError::InvalidConfig("np must be positive".into()));
        }
        if let (Some(re), Some(u), Some(l)) =
            (self.reynolds, self.characteristic_velocity, self.characteristic_length)
        {
            let implied = u * l / self.viscosity;
            if (implied - re).abs() / re.max(1e-12) > 1e-3 {
                return Err(LbmError::InvalidConfig(format!(
                    "reynolds={re} disagrees with viscosity={} (U*L/nu={implied:.6})",
                    self.viscosity
                )));
            }
        }
        Ok(())
    }

    /// Relaxation time derived from lattice speed of sound squared and the
    /// physical viscosity: `tau = viscosity / CS2 + 1/2`.
    pub fn tau(&self, cs2: f64) -> f64 {
        self.viscosity / cs2 + 0.5
    }
}
