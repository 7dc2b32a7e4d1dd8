//! Configuration loading for Enigma.
//!
//! The config file selects the parts placed in the machine and their initial
//! settings. Raw TOML structs keep every field optional; [`MachineSettings::resolve`]
//! turns them into a [`Machine`] at the parse boundary.
//!
//! ```toml
//! [machine]
//! reflector = "B"
//!
//! [machine.plugboard]
//! preset = "none"
//! pairs = ["AQ", "CD"]
//!
//! [machine.right]
//! rotor = "III"
//! position = 0
//! ring_setting = "A"
//! ```
//!
//! Invalid selections never abort: each one is replaced by the historical
//! default (rotors III/II/I, position and ring setting A, reflector B, no
//! plugboard cables) and reported with `tracing::warn!`.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use enigma_core::catalog::{REFLECTOR_B, default_rotor};
use enigma_core::{Catalog, Machine, Plugboard, Reflector, Rotor, RotorSet, Slot};
use enigma_types::{
    Involution, Letter, PlugboardPreset, Position, ReflectorId, RingSetting, RotorId,
    SettingError, SettingKind,
};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "ENIGMA_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct EnigmaConfig {
    pub machine: Option<MachineSettings>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Parts and initial settings of the machine.
#[derive(Debug, Default, Deserialize)]
pub struct MachineSettings {
    /// "B" or "C". Default: B.
    pub reflector: Option<String>,
    pub plugboard: Option<PlugboardSettings>,
    pub right: Option<RotorSettings>,
    pub middle: Option<RotorSettings>,
    pub left: Option<RotorSettings>,
}

/// ```toml
/// [machine.plugboard]
/// preset = "qc"
/// pairs = ["AQ", "CD"]
/// ```
///
/// Explicit `pairs` take precedence over `preset`.
#[derive(Debug, Default, Deserialize)]
pub struct PlugboardSettings {
    /// "none" or "qc". Default: none.
    pub preset: Option<String>,
    #[serde(default)]
    pub pairs: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RotorSettings {
    /// Roman numeral I-V (or its menu number 1-5).
    pub rotor: Option<String>,
    pub position: Option<SettingValue>,
    pub ring_setting: Option<SettingValue>,
}

/// A rotor offset written either as a number 0-25 or as a letter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Index(i64),
    Letter(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingValueError {
    #[error(transparent)]
    Range(#[from] SettingError),
    #[error("'{0}' is not a single letter A-Z")]
    NotALetter(String),
}

impl SettingValue {
    pub fn to_letter(&self, kind: SettingKind) -> Result<Letter, SettingValueError> {
        match (self, kind) {
            (SettingValue::Index(value), SettingKind::Position) => {
                Ok(Position::new(*value)?.letter())
            }
            (SettingValue::Index(value), SettingKind::RingSetting) => {
                Ok(RingSetting::new(*value)?.letter())
            }
            (SettingValue::Letter(raw), _) => {
                let mut chars = raw.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Letter::from_char(ch.to_ascii_uppercase())
                        .map_err(|_| SettingValueError::NotALetter(raw.clone())),
                    _ => Err(SettingValueError::NotALetter(raw.clone())),
                }
            }
        }
    }
}

impl EnigmaConfig {
    /// Load from the default location. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::from_toml_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Assemble the configured machine from the standard catalog.
    #[must_use]
    pub fn build_machine(&self) -> Machine {
        match &self.machine {
            Some(settings) => settings.resolve(Catalog::standard()),
            None => Machine::demonstration(),
        }
    }
}

impl MachineSettings {
    /// Resolve every selection against `catalog`, substituting defaults for
    /// anything invalid.
    #[must_use]
    pub fn resolve(&self, catalog: &Catalog) -> Machine {
        let rotors = RotorSet::new(
            resolve_rotor(self.right.as_ref(), Slot::Right, catalog),
            resolve_rotor(self.middle.as_ref(), Slot::Middle, catalog),
            resolve_rotor(self.left.as_ref(), Slot::Left, catalog),
        );
        let reflector = resolve_reflector(self.reflector.as_deref(), catalog);
        let plugboard = resolve_plugboard(self.plugboard.as_ref(), catalog);
        Machine::new(rotors, reflector, plugboard)
    }
}

fn resolve_rotor(settings: Option<&RotorSettings>, slot: Slot, catalog: &Catalog) -> Rotor {
    let fallback = default_rotor(slot);
    let definition = match settings.and_then(|s| s.rotor.as_deref()) {
        None => fallback,
        Some(raw) => match RotorId::parse(raw).map(|id| (id, catalog.rotor(id))) {
            Ok((_, Some(definition))) => definition,
            Ok((id, None)) => {
                tracing::warn!(%slot, "{id} is not in the catalog, defaulting to {}", fallback.id());
                fallback
            }
            Err(err) => {
                tracing::warn!(%slot, "{err}, defaulting to {}", fallback.id());
                fallback
            }
        },
    };

    let position = resolve_offset(
        settings.and_then(|s| s.position.as_ref()),
        slot,
        SettingKind::Position,
    );
    let ring_setting = resolve_offset(
        settings.and_then(|s| s.ring_setting.as_ref()),
        slot,
        SettingKind::RingSetting,
    );
    tracing::debug!(%slot, rotor = %definition.id(), %position, %ring_setting, "Resolved rotor");

    definition
        .instantiate()
        .with_position(Position::from_letter(position))
        .with_ring_setting(RingSetting::from_letter(ring_setting))
}

fn resolve_offset(value: Option<&SettingValue>, slot: Slot, kind: SettingKind) -> Letter {
    let Some(value) = value else {
        return Letter::A;
    };
    match value.to_letter(kind) {
        Ok(letter) => letter,
        Err(err) => {
            tracing::warn!(%slot, "Invalid {kind} ({err}), defaulting to 0 (A)");
            Letter::A
        }
    }
}

fn resolve_reflector(raw: Option<&str>, catalog: &Catalog) -> Reflector {
    let Some(raw) = raw else {
        return REFLECTOR_B.instantiate();
    };
    match ReflectorId::parse(raw).map(|id| catalog.reflector(id)) {
        Ok(Some(definition)) => definition.instantiate(),
        Ok(None) => {
            tracing::warn!("Reflector '{raw}' is not in the catalog, defaulting to Reflector B");
            REFLECTOR_B.instantiate()
        }
        Err(err) => {
            tracing::warn!("{err}, defaulting to Reflector B");
            REFLECTOR_B.instantiate()
        }
    }
}

fn resolve_plugboard(settings: Option<&PlugboardSettings>, catalog: &Catalog) -> Plugboard {
    let Some(settings) = settings else {
        return Plugboard::unconnected();
    };

    if !settings.pairs.is_empty() {
        if settings.preset.is_some() {
            tracing::debug!("Plugboard pairs given, ignoring preset");
        }
        return match Involution::parse_pairs(&settings.pairs.join(" ")) {
            Ok(wiring) => Plugboard::new(wiring),
            Err(err) => {
                tracing::warn!("Invalid plugboard pairs ({err}), defaulting to no connections");
                Plugboard::unconnected()
            }
        };
    }

    let Some(raw) = settings.preset.as_deref() else {
        return Plugboard::unconnected();
    };
    match PlugboardPreset::parse(raw).map(|preset| catalog.plugboard(preset)) {
        Ok(Some(definition)) => definition.instantiate(),
        Ok(None) => {
            tracing::warn!("Plugboard preset '{raw}' is not in the catalog, defaulting to no connections");
            Plugboard::unconnected()
        }
        Err(err) => {
            tracing::warn!("{err}, defaulting to no connections");
            Plugboard::unconnected()
        }
    }
}

/// `$ENIGMA_CONFIG` if set, otherwise `~/.enigma/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    match env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => dirs::home_dir().map(|home| home.join(".enigma").join("config.toml")),
    }
}
