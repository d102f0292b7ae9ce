//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["study-assistant.toml", ".study-assistant.toml"];
const APP_DIR: &str = "study-assistant";
const ENV_PREFIX: &str = "STUDY_ASSISTANT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `STUDY_ASSISTANT_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./study-assistant.toml` or `./.study-assistant.toml`
    /// 4. Global: `<config dir>/study-assistant/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config sources being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        for line in Self::config_sources(
            config_path.map(PathBuf::as_path),
            Self::project_config_path().as_deref(),
            Self::global_config_path().as_deref(),
        ) {
            println!("  {}", line);
        }
    }

    /// One line per source, highest priority first, matching the merge
    /// order of [`ConfigLoader::load`].
    fn config_sources(
        explicit: Option<&Path>,
        project: Option<&Path>,
        global: Option<&Path>,
    ) -> Vec<String> {
        let mut lines = Vec::new();

        let env_set = std::env::vars().any(|(key, _)| key.starts_with(ENV_PREFIX));
        lines.push(format!(
            "[{}] Env:      {}* variables",
            if env_set { "FOUND" } else { "     " },
            ENV_PREFIX
        ));

        match explicit {
            Some(path) if path.exists() => {
                lines.push(format!("[FOUND] Explicit: {}", path.display()))
            }
            Some(path) => lines.push(format!("[     ] Explicit: {} (not found)", path.display())),
            None => lines.push("[     ] Explicit: --config <path>".to_string()),
        }

        match project {
            Some(path) => lines.push(format!("[FOUND] Project:  {}", path.display())),
            None => lines.push(
                "[     ] Project:  ./study-assistant.toml or ./.study-assistant.toml".to_string(),
            ),
        }

        if let Some(path) = global {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("[{}] Global:   {}", mark, path.display()));
        }

        lines.push("[     ] Default:  built-in defaults".to_string());
        lines
    }
}
