//! Configuration management system for the shiftwatch application.
//!
//! This module owns the persisted settings that drive every schedule
//! computation: the recurring shift window, the three break slots, and the
//! alert thresholds. It supports both programmatic access and an interactive
//! setup wizard.
//!
//! ## Configuration Structure
//!
//! Each concern has its own optional section so users only configure what
//! they use:
//!
//! - **Shift Config**: Daily shift start and (optional) end as wall-clock times
//! - **Breaks Config**: Up to three break slots, each with a time of day and
//!   a duration in seconds
//! - **Notify Config**: Whole-minute warning offsets for upcoming breaks and
//!   for the end of the shift
//!
//! ## Storage
//!
//! Settings are stored as pretty-printed JSON in the platform application
//! data directory (see [`DataStorage`]). A missing file is not an error; it
//! simply yields the default configuration. The watch loop re-reads the file
//! every tick, so edits take effect without restarting the watcher.
//!
//! ## Time-of-day fields
//!
//! Shift and break times are kept as `"HH:MM"` strings exactly as entered.
//! Interpretation (strict for the shift, lenient for breaks) happens in the
//! schedule core, not here; a malformed value disables the feature rather
//! than failing the whole configuration.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use shiftwatch::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or defaults
//! let config = Config::read()?;
//!
//! // Run the interactive setup wizard and persist the result
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::breaks::BreakKey;
use crate::libs::messages::Message;
use crate::libs::schedule::parse_time_strict;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Recurring daily shift settings.
///
/// The start time is the anchor for everything else; without a valid start
/// the schedule core treats the shift as not configured. An end at or before
/// the start means the shift crosses midnight, and a missing end falls back
/// to a 9-hour duration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ShiftConfig {
    /// Shift start as "HH:MM" wall-clock time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Shift end as "HH:MM" wall-clock time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// One recurring break slot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BreakSlotConfig {
    /// Break start as "HH:MM" wall-clock time; absent means the slot is unused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Break length in seconds.
    pub duration_secs: u64,
}

/// The three break slots.
///
/// Slots keep their identity (`break1`..`break3`) rather than being a free
/// list: the manual break surface and the countdown both address breaks by
/// slot, and ordering ties between slots are broken by this fixed order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BreaksConfig {
    pub break1: BreakSlotConfig,
    pub break2: BreakSlotConfig,
    pub break3: BreakSlotConfig,
}

/// Warning offsets, in whole minutes, for the watch loop's one-shot alerts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NotifyConfig {
    /// Fire an alert when this many whole minutes remain before a break.
    pub break_warn_minutes: Vec<i64>,

    /// Fire an alert when this many whole minutes remain before shift end.
    pub shift_end_warn_minutes: Vec<i64>,
}

/// Main configuration container for the entire application.
///
/// All sections are optional; missing sections fall back to their defaults
/// at the point of use, and `skip_serializing_if` keeps unconfigured
/// sections out of the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Recurring shift window settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftConfig>,

    /// Break slot settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaks: Option<BreaksConfig>,

    /// Alert threshold settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<NotifyConfig>,
}

impl BreaksConfig {
    /// Returns the slot configuration for a break key.
    pub fn slot(&self, key: BreakKey) -> &BreakSlotConfig {
        match key {
            BreakKey::Break1 => &self.break1,
            BreakKey::Break2 => &self.break2,
            BreakKey::Break3 => &self.break3,
        }
    }

    fn slot_mut(&mut self, key: BreakKey) -> &mut BreakSlotConfig {
        match key {
            BreakKey::Break1 => &mut self.break1,
            BreakKey::Break2 => &mut self.break2,
            BreakKey::Break3 => &mut self.break3,
        }
    }
}

impl Default for BreaksConfig {
    /// Unset times with the conventional slot durations: two short breaks of
    /// 15 minutes around a 30-minute main break.
    fn default() -> Self {
        BreaksConfig {
            break1: BreakSlotConfig { time: None, duration_secs: 15 * 60 },
            break2: BreakSlotConfig { time: None, duration_secs: 30 * 60 },
            break3: BreakSlotConfig { time: None, duration_secs: 15 * 60 },
        }
    }
}

impl Default for NotifyConfig {
    /// Ten and five minutes ahead of a break, five ahead of shift end.
    fn default() -> Self {
        NotifyConfig {
            break_warn_minutes: vec![10, 5],
            shift_end_warn_minutes: vec![5],
        }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default configuration when no file exists yet; a file
    /// that exists but cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Presents a multi-select of configurable modules, then prompts for the
    /// parameters of each selected module with existing values pre-filled as
    /// defaults. The returned configuration still has to be [`save`]d.
    ///
    /// [`save`]: Config::save
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ConfigModule {
                key: "shift".to_string(),
                name: Message::ConfigModuleShift.to_string(),
            },
            ConfigModule {
                key: "breaks".to_string(),
                name: Message::ConfigModuleBreaks.to_string(),
            },
            ConfigModule {
                key: "notify".to_string(),
                name: Message::ConfigModuleNotify.to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "shift" => {
                    let default = config.shift.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleShift);
                    config.shift = Some(ShiftConfig {
                        start: prompt_time(Message::PromptShiftStart, default.start)?,
                        end: prompt_time(Message::PromptShiftEnd, default.end)?,
                    });
                }
                "breaks" => {
                    let mut breaks = config.breaks.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleBreaks);
                    for key in BreakKey::ALL {
                        let slot = breaks.slot_mut(key);
                        slot.time = prompt_time(Message::PromptBreakTime(key.to_string()), slot.time.take())?;
                        let minutes: u64 = Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBreakDuration(key.to_string()).to_string())
                            .default(slot.duration_secs / 60)
                            .interact_text()?;
                        slot.duration_secs = minutes * 60;
                    }
                    config.breaks = Some(breaks);
                }
                "notify" => {
                    let default = config.notify.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleNotify);
                    config.notify = Some(NotifyConfig {
                        break_warn_minutes: prompt_minutes_list(Message::PromptBreakWarnMinutes, &default.break_warn_minutes)?,
                        shift_end_warn_minutes: prompt_minutes_list(Message::PromptShiftEndWarnMinutes, &default.shift_end_warn_minutes)?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Prompts for an optional "HH:MM" time of day; empty input clears the field.
fn prompt_time(prompt: Message, default: Option<String>) -> Result<Option<String>> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if input.trim().is_empty() || parse_time_strict(input).is_some() {
                Ok(())
            } else {
                Err(Message::InvalidTimeOfDay.to_string())
            }
        })
        .interact_text()?;

    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.to_string()))
    }
}

/// Prompts for a comma-separated list of whole-minute offsets.
fn prompt_minutes_list(prompt: Message, default: &[i64]) -> Result<Vec<i64>> {
    let default_str = default.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(",");
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default_str)
        .interact_text()?;

    Ok(value.split(',').filter_map(|part| part.trim().parse().ok()).collect())
}
