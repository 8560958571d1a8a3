//! Run parameters for a full pipeline pass.

use serde::{ Deserialize, Serialize };
use crate::{
    DEF_LEVELS,
    DEF_STEP,
    error::{ ConfigError, WellError },
    solve::{ System, WResult },
    well::Well,
};

/// JSON-configurable parameters governing a single run.
///
/// Missing fields take their default values:
/// ```
/// use sqwell::config::Config;
///
/// let config = Config::from_json(r#"{ "step": 0.01 }"#).unwrap();
/// assert_eq!(config.n_max, 5);
/// assert_eq!(config.step, 0.01);
/// assert!(config.shift);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of levels to compute.
    #[serde(default = "default_levels")]
    pub n_max: usize,
    /// Integration step size.
    #[serde(default = "default_step")]
    pub step: f64,
    /// Offset each plotted curve by its level's energy.
    #[serde(default = "default_shift")]
    pub shift: bool,
}

fn default_levels() -> usize { DEF_LEVELS }

fn default_step() -> f64 { DEF_STEP }

fn default_shift() -> bool { true }

impl Default for Config {
    fn default() -> Self {
        Self {
            n_max: default_levels(),
            step: default_step(),
            shift: default_shift(),
        }
    }
}

impl Config {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace any of the fields with explicitly given values and validate
    /// the result.
    ///
    /// `None` keeps the current value, so command-line flags can be layered
    /// over a loaded file:
    /// ```
    /// use sqwell::config::Config;
    ///
    /// let file = Config::from_json(r#"{ "n_max": 3, "step": 0.01 }"#).unwrap();
    /// let config = file.with_overrides(None, Some(0.02), Some(false)).unwrap();
    /// assert_eq!(config, Config { n_max: 3, step: 0.02, shift: false });
    /// ```
    pub fn with_overrides(
        mut self,
        n_max: Option<usize>,
        step: Option<f64>,
        shift: Option<bool>,
    ) -> WResult<Self>
    {
        if let Some(n_max) = n_max { self.n_max = n_max; }
        if let Some(step) = step { self.step = step; }
        if let Some(shift) = shift { self.shift = shift; }
        self.validate()?;
        Ok(self)
    }

    /// Check that at least one level is requested and that the step size is
    /// positive, finite, and not so small that the well cannot be sampled.
    pub fn validate(&self) -> WResult<()> {
        WellError::check_levels(self.n_max)?;
        Well::default().sample_count(self.step)?;
        Ok(())
    }

    /// Build a [`System`] for the [default well][Well::default].
    pub fn system(&self) -> WResult<System> {
        self.validate()?;
        System::new(Well::default(), self.step)
    }
}
