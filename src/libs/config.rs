//! Configuration for the report pipeline.
//!
//! Holds the three paths every run needs: the timelog source file, the
//! client rate file and the root directory for HTML report pages. The value
//! is immutable once constructed and is passed explicitly into
//! [`TimelogReport`](crate::libs::report::TimelogReport); there is no
//! process-wide mutable state.
//!
//! Settings persist as JSON in the platform application-data directory. A
//! missing file is not an error: defaults point at the conventional
//! `~/vimwiki` log locations and can be adjusted with `timelog init`.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env::var;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// The append-only activity log to parse.
    pub timelog_path: PathBuf,
    /// The client rate file, `label:unit:rate` per line.
    pub clients_path: PathBuf,
    /// Root directory for generated HTML report pages.
    pub site_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home = PathBuf::from(var("HOME").unwrap_or_else(|_| ".".into()));
        Self {
            timelog_path: home.join("vimwiki").join("timelog.txt"),
            clients_path: home.join("vimwiki").join("projects.txt"),
            site_path: home.join("reports"),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let timelog_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimelogPath.to_string())
            .default(current.timelog_path.display().to_string())
            .interact_text()?;
        let clients_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptClientsPath.to_string())
            .default(current.clients_path.display().to_string())
            .interact_text()?;
        let site_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSitePath.to_string())
            .default(current.site_path.display().to_string())
            .interact_text()?;

        Ok(Config {
            timelog_path: PathBuf::from(timelog_path),
            clients_path: PathBuf::from(clients_path),
            site_path: PathBuf::from(site_path),
        })
    }
}
