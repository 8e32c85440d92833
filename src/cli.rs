//! CLI argument types and layered configuration for the `nearlyeq` binary.
//! Loads from CLI args, environment (prefix `NEARLYEQ_`), and optional config
//! files.

use crate::{Comparator, ComparisonMode, InvalidToleranceError};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use ortho_config::OrthoError;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Tolerance used when none is configured.
pub const DEFAULT_EPSILON: f64 = 1e-9;

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

/// Errors surfaced by the `nearlyeq` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] Arc<OrthoError>),
    #[error(transparent)]
    Tolerance(#[from] InvalidToleranceError),
}

/// Command-line arguments for the `nearlyeq` binary.
///
/// Operands and the comparison policy can come from command line flags,
/// environment variables (prefixed with `NEARLYEQ_`), or a TOML
/// configuration file, in that order of precedence.
///
/// # Examples
///
/// ```
/// use nearly_equal::{ComparisonMode, cli::NearlyEqArgs};
/// use ortho_config::OrthoConfig;
///
/// let args = NearlyEqArgs::load_from_iter(["nearlyeq", "--lhs", "1", "--rhs", "1", "--mode", "ulp"])
///     .expect("load args from CLI iterator");
/// assert_eq!(args.mode, ComparisonMode::Ulp);
/// assert!(args.evaluate().expect("valid tolerance"));
/// ```
#[derive(Debug, Deserialize, ortho_config::OrthoConfig)]
#[ortho_config(prefix = "NEARLYEQ")]
pub struct NearlyEqArgs {
    /// Left-hand operand.
    pub lhs: f64,

    /// Right-hand operand.
    pub rhs: f64,

    /// Comparison tolerance; for `ulp` mode its floor is the ULP budget.
    #[ortho_config(default = 1e-9)]
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Comparison policy: `absolute`, `relative`, or `ulp`.
    #[serde(default)]
    pub mode: ComparisonMode,

    /// Optional path to a configuration file.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl NearlyEqArgs {
    /// The comparison policy described by these arguments.
    #[must_use]
    pub const fn comparator(&self) -> Comparator {
        Comparator::new(self.mode, self.epsilon)
    }

    /// Compare `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidToleranceError`] if `epsilon` is not positive and
    /// finite.
    pub fn evaluate(&self) -> Result<bool, InvalidToleranceError> {
        let outcome = self.comparator().compare(self.lhs, self.rhs)?;
        debug!(
            lhs = self.lhs,
            rhs = self.rhs,
            epsilon = self.epsilon,
            mode = %self.mode,
            outcome,
            "compared operands"
        );
        Ok(outcome)
    }

    /// Load configuration solely from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an [`OrthoError`] if any variable cannot be parsed.
    pub fn load_from_env() -> Result<Self, OrthoError> {
        Figment::new()
            .merge(Env::prefixed("NEARLYEQ_"))
            .extract()
            .map_err(Into::into)
    }

    /// Load configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an [`OrthoError`] if the file cannot be read or parsed.
    pub fn load_from_config(path: &str) -> Result<Self, OrthoError> {
        Figment::new()
            .merge(Toml::file(path))
            .extract()
            .map_err(Into::into)
    }

    /// Load configuration from environment variables and a file path.
    ///
    /// # Errors
    ///
    /// Returns an [`OrthoError`] if either source contains invalid values.
    pub fn load_from_env_and_config(path: &str) -> Result<Self, OrthoError> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("NEARLYEQ_"))
            .extract()
            .map_err(Into::into)
    }
}
