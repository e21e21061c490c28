/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::{Arg, ArgMatches, Command};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::FloorRegistry;
use crate::shared::Floor;

pub const DEFAULT_CONFIG: &str = "config.toml";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub shell: ShellConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub lowest_floor: Floor,
    pub highest_floor: Floor,
    pub start_floor: Option<Floor>,
    pub travel_time: u64,
    pub wait_time: u64,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    pub json: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            lowest_floor: 0,
            highest_floor: 5,
            start_floor: None,
            travel_time: 3000,
            wait_time: 1000,
        }
    }
}

impl ElevatorConfig {
    pub fn travel_duration(&self) -> Duration {
        Duration::from_millis(self.travel_time)
    }

    pub fn wait_duration(&self) -> Duration {
        Duration::from_millis(self.wait_time)
    }

    pub fn registry(&self) -> Result<FloorRegistry, ConfigError> {
        FloorRegistry::new(self.lowest_floor, self.highest_floor)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Floor the car starts at: `start_floor` if given, otherwise the lowest floor.
    pub fn initial_floor(&self) -> Floor {
        self.start_floor.unwrap_or(self.lowest_floor)
    }
}

/***************************************/
/*             Public API              */
/***************************************/
impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let registry = self.elevator.registry()?;
        registry
            .validate(self.elevator.initial_floor())
            .map_err(|e| ConfigError::Invalid(format!("start_floor: {}", e)))?;
        Ok(())
    }
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn cli() -> Command<'static> {
    Command::new("elevator-sim")
        .about("Simulates a single elevator car serving a fixed set of floors")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .value_name("PATH")
                .help("Configuration file [default: config.toml]"),
        )
        .arg(
            Arg::new("travel-time")
                .long("travel-time")
                .takes_value(true)
                .value_name("MS")
                .help("Time to travel one floor, in milliseconds"),
        )
        .arg(
            Arg::new("wait-time")
                .long("wait-time")
                .takes_value(true)
                .value_name("MS")
                .help("Time to dwell at each stop, in milliseconds"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print state updates as JSON lines"),
        )
}

/**
 * Builds the effective configuration from the command line.
 *
 * A file given with `--config` must exist. Without it, `default_path` is read if it
 * exists and the built-in defaults are used otherwise. Command line values override
 * whatever the file says.
 */
pub fn resolve_config(matches: &ArgMatches, default_path: &Path) -> Result<Config, ConfigError> {
    let mut config = match matches.value_of("config") {
        Some(path) => load_config(Path::new(path))?,
        None if default_path.exists() => load_config(default_path)?,
        None => {
            info!("No {:?} found, using built-in defaults", default_path);
            Config::default()
        }
    };

    if let Some(travel_time) = parse_millis(matches, "travel-time")? {
        config.elevator.travel_time = travel_time;
    }
    if let Some(wait_time) = parse_millis(matches, "wait-time")? {
        config.elevator.wait_time = wait_time;
    }
    if matches.is_present("json") {
        config.shell.json = true;
    }

    config.validate()?;
    Ok(config)
}

fn parse_millis(matches: &ArgMatches, name: &str) -> Result<Option<u64>, ConfigError> {
    match matches.value_of(name) {
        Some(value) => value.parse::<u64>().map(Some).map_err(|_| {
            ConfigError::Invalid(format!("--{} expects milliseconds, got '{}'", name, value))
        }),
        None => Ok(None),
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
