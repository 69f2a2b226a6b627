use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Record-source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    /// Input record file read when the command line names none
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
        }
    }
}

/// Report rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Base URL the averaged coordinate is appended to as query parameters
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("results.csv")
}

fn default_base_url() -> String {
    "https://www.theadvocates.org/results/libertarian".to_string()
}

/// Top-level `.quizmap.toml` contents. Every section is optional; the
/// defaults reproduce the flagless behavior exactly. The answer point
/// table is deliberately absent here: scoring is a fixed function, not a
/// knob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizmapConfig {
    /// Record-source settings
    #[serde(default)]
    pub io: Option<IoConfig>,

    /// Report settings
    #[serde(default)]
    pub report: Option<ReportConfig>,
}

impl QuizmapConfig {
    /// Input record file to analyze when the command line names none
    pub fn input_path(&self) -> PathBuf {
        self.io
            .as_ref()
            .map(|io| io.input_path.clone())
            .unwrap_or_else(default_input_path)
    }

    /// Base URL for result links
    pub fn base_url(&self) -> String {
        self.report
            .as_ref()
            .map(|report| report.base_url.clone())
            .unwrap_or_else(default_base_url)
    }
}

static CONFIG: OnceLock<QuizmapConfig> = OnceLock::new();

/// Pure function to read config file contents
fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
#[cfg(test)]
pub(crate) fn parse_config(contents: &str) -> Result<QuizmapConfig, String> {
    parse_config_impl(contents)
}

fn parse_config_impl(contents: &str) -> Result<QuizmapConfig, String> {
    toml::from_str::<QuizmapConfig>(contents)
        .map_err(|e| format!("Failed to parse .quizmap.toml: {}", e))
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<QuizmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config_impl(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from the nearest `.quizmap.toml`, if any
pub fn load_config() -> QuizmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return QuizmapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".quizmap.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            QuizmapConfig::default()
        })
}

/// Get the cached configuration
pub fn get_config() -> &'static QuizmapConfig {
    CONFIG.get_or_init(load_config)
}
