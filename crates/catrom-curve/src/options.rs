//! Curve sampling options.

use std::path::Path;

use catrom_core::traits::Validate;
use catrom_core::{CurveError, Result};
use serde::{Deserialize, Serialize};

use crate::catmull_rom::{DEFAULT_ALPHA, DEFAULT_SAMPLE_COUNT};

/// Options for sampling a Catmull-Rom curve.
///
/// Missing fields in a serialized form take their defaults:
/// `{"closed": false, "sample_count": 100, "alpha": 0.5}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    /// Join the last control point back to the first.
    pub closed: bool,
    /// Number of points produced by sampling.
    pub sample_count: usize,
    /// Parameterization exponent: 0 uniform, 0.5 centripetal, 1 chordal.
    pub alpha: f64,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            closed: false,
            sample_count: DEFAULT_SAMPLE_COUNT,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl CurveOptions {
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Parse and validate options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&content)?;
        log::info!("curve options loaded from {}", path.display());
        Ok(options)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Validate for CurveOptions {
    fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(CurveError::InvalidOption(format!(
                "alpha must lie in [0, 1], got {}",
                self.alpha
            )));
        }
        if self.sample_count < 2 {
            return Err(CurveError::InvalidOption(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        Ok(())
    }
}
