use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Source tag stored on events created from this CLI.
    #[serde(default = "default_source")]
    pub default_source: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_source() -> String {
    "CLI".to_string()
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_source: default_source(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("kronos")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".kronos")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kronos.conf")
    }

    /// Full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("kronos.sqlite")
    }

    /// Resolve a `--db` value: absolute paths are taken as-is, relative
    /// names land inside the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = PathBuf::from(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize configuration and database files. Returns the resolved
    /// configuration so callers open the same database path that was
    /// written: a relative `--db` lands inside the config directory.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Test runs must never touch the user's config file.
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }

    /// Report config keys that are missing from the file on disk.
    /// Missing keys are not fatal at load time (serde fills defaults);
    /// this is the `config --check` diagnostic.
    pub fn missing_keys() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

        let mut missing = Vec::new();
        if let Some(map) = yaml.as_mapping() {
            for key in ["database", "default_source", "separator_char"] {
                if !map.contains_key(&serde_yaml::Value::String(key.to_string())) {
                    missing.push(key);
                }
            }
        }
        Ok(missing)
    }
}
