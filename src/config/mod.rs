use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
    #[serde(default = "default_model_dir")]
    pub model_dir: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_preview_len")]
    pub preview_len: usize,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

fn default_database() -> String {
    Config::config_dir()
        .join("scope.sqlite")
        .to_string_lossy()
        .to_string()
}
fn default_logs_dir() -> String {
    Config::config_dir().join("logs").to_string_lossy().to_string()
}
fn default_model_dir() -> String {
    Config::config_dir()
        .join("models")
        .to_string_lossy()
        .to_string()
}
fn default_session_file() -> String {
    Config::config_dir()
        .join("session.yml")
        .to_string_lossy()
        .to_string()
}
fn default_max_entries() -> usize {
    5
}
fn default_preview_len() -> usize {
    100
}
fn default_chart_width() -> usize {
    60
}
fn default_chart_height() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            logs_dir: default_logs_dir(),
            model_dir: default_model_dir(),
            session_file: default_session_file(),
            max_entries: default_max_entries(),
            preview_len: default_preview_len(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("scope")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".scope")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("scope.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Rebase every path-like setting under `dir` (used by `--data-dir`).
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.database = dir.join("scope.sqlite").to_string_lossy().to_string();
        self.logs_dir = dir.join("logs").to_string_lossy().to_string();
        self.model_dir = dir.join("models").to_string_lossy().to_string();
        self.session_file = dir.join("session.yml").to_string_lossy().to_string();
        self
    }

    pub fn model_file(&self) -> PathBuf {
        Path::new(&self.model_dir).join("model.json")
    }

    pub fn vectorizer_file(&self) -> PathBuf {
        Path::new(&self.model_dir).join("vectorizer.json")
    }

    /// Create the config directory, the config file (unless `is_test`),
    /// the logs directory and the model directory.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(self)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = Path::new(&self.database).parent() {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir_all(&self.logs_dir)?;
        fs::create_dir_all(&self.model_dir)?;

        println!("✅ Logs dir:   {:?}", self.logs_dir);
        println!("✅ Models dir: {:?}", self.model_dir);

        Ok(())
    }
}
