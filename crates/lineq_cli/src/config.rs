use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

use lineq_engine::{DiagnosisThresholds, DEFAULT_CALCULATION_GAP, DEFAULT_TOLERANCE};

pub const CONFIG_FILE: &str = "lineq_config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Answers closer than this to the solution are correct
    pub tolerance: f64,
    /// Wrong answers further than this count as calculation errors
    pub calculation_gap: f64,
    /// Where progress files live (defaults to the platform data dir)
    pub data_dir: Option<PathBuf>,
    pub learner: String,
    /// Lines kept in the REPL history file
    pub max_history_size: usize,
    /// Print the balance after every operation
    pub show_weights: bool,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            calculation_gap: DEFAULT_CALCULATION_GAP,
            data_dir: None,
            learner: "default".to_string(),
            max_history_size: 100,
            show_weights: true,
        }
    }
}

impl TutorConfig {
    /// Read the config at `path`, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!(
                        target: "lineq::config",
                        path = %path.display(),
                        error = %e,
                        "error parsing config file, using defaults"
                    ),
                },
                Err(e) => warn!(
                    target: "lineq::config",
                    path = %path.display(),
                    error = %e,
                    "error reading config file, using defaults"
                ),
            }
        }
        Self::default()
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Overwrite the file at `path` with defaults.
    pub fn restore(path: &Path) -> Self {
        let config = Self::default();
        if let Err(e) = config.save(path) {
            warn!(target: "lineq::config", error = %e, "could not write default config");
        }
        config
    }

    pub fn thresholds(&self) -> DiagnosisThresholds {
        DiagnosisThresholds {
            tolerance: self.tolerance,
            calculation_gap: self.calculation_gap,
        }
    }

    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|p| p.join("lineq"))
                .unwrap_or_else(|| PathBuf::from(".lineq"))
        })
    }
}
