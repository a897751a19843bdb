//! Store configuration.
//!
//! Defaults match what the browser client wrote: one slot named
//! `namma_salai_complaints`, a placeholder submitter identity and no
//! transition checks. Every value can be overridden from the environment.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::validation::transition::TransitionPolicy;

pub const DEFAULT_SLOT: &str = "namma_salai_complaints";
pub const DEFAULT_USER: &str = "Current User";
/// 5 MiB decoded photo.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub const ENV_SLOT: &str = "NAMMA_SALAI_SLOT";
pub const ENV_DATA_DIR: &str = "NAMMA_SALAI_DATA_DIR";
pub const ENV_DEFAULT_USER: &str = "NAMMA_SALAI_DEFAULT_USER";
pub const ENV_TRANSITIONS: &str = "NAMMA_SALAI_TRANSITIONS";
pub const ENV_CORRUPT_SLOT: &str = "NAMMA_SALAI_CORRUPT_SLOT";
pub const ENV_MAX_IMAGE_BYTES: &str = "NAMMA_SALAI_MAX_IMAGE_BYTES";

/// What a write does when the slot holds data that is not a complaint list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptSlotPolicy {
    /// Refuse the write and leave the slot untouched.
    #[default]
    FailFast,
    /// Start over from an empty collection.
    TreatAsEmpty,
}

impl CorruptSlotPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorruptSlotPolicy::FailFast => "fail_fast",
            CorruptSlotPolicy::TreatAsEmpty => "treat_as_empty",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fail_fast" | "fail-fast" => Some(CorruptSlotPolicy::FailFast),
            "treat_as_empty" | "treat-as-empty" | "empty" => Some(CorruptSlotPolicy::TreatAsEmpty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub slot_name: String,
    /// `None` keeps the collection in memory only.
    pub data_dir: Option<PathBuf>,
    pub default_user: String,
    pub transition_policy: TransitionPolicy,
    pub corrupt_slot_policy: CorruptSlotPolicy,
    pub max_image_bytes: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            slot_name: DEFAULT_SLOT.to_string(),
            data_dir: None,
            default_user: DEFAULT_USER.to_string(),
            transition_policy: TransitionPolicy::default(),
            corrupt_slot_policy: CorruptSlotPolicy::default(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl StoreConfig {
    /// Read configuration from `NAMMA_SALAI_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unset or blank keys keep their defaults; set keys must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(slot) = get(ENV_SLOT) {
            config.slot_name = slot.trim().to_string();
        }

        if let Some(dir) = get(ENV_DATA_DIR) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(user) = get(ENV_DEFAULT_USER) {
            config.default_user = user;
        }

        if let Some(value) = get(ENV_TRANSITIONS) {
            config.transition_policy =
                TransitionPolicy::parse(&value).ok_or_else(|| ConfigError {
                    key: ENV_TRANSITIONS,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = get(ENV_CORRUPT_SLOT) {
            config.corrupt_slot_policy =
                CorruptSlotPolicy::parse(&value).ok_or_else(|| ConfigError {
                    key: ENV_CORRUPT_SLOT,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = get(ENV_MAX_IMAGE_BYTES) {
            config.max_image_bytes = value.trim().parse().map_err(|_| ConfigError {
                key: ENV_MAX_IMAGE_BYTES,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.slot_name, "namma_salai_complaints");
        assert_eq!(config.default_user, "Current User");
        assert_eq!(config.transition_policy, TransitionPolicy::Permissive);
        assert_eq!(config.corrupt_slot_policy, CorruptSlotPolicy::FailFast);
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            (ENV_SLOT, "complaints_v2"),
            (ENV_DATA_DIR, "/var/lib/namma-salai"),
            (ENV_TRANSITIONS, "sequential"),
            (ENV_CORRUPT_SLOT, "treat_as_empty"),
            (ENV_MAX_IMAGE_BYTES, "1024"),
        ]))
        .unwrap();

        assert_eq!(config.slot_name, "complaints_v2");
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/namma-salai")));
        assert_eq!(config.transition_policy, TransitionPolicy::Sequential);
        assert_eq!(config.corrupt_slot_policy, CorruptSlotPolicy::TreatAsEmpty);
        assert_eq!(config.max_image_bytes, 1024);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[(ENV_SLOT, "  "), (ENV_TRANSITIONS, "")]))
            .unwrap();
        assert_eq!(config.slot_name, DEFAULT_SLOT);
        assert_eq!(config.transition_policy, TransitionPolicy::Permissive);
    }

    #[test]
    fn test_invalid_values() {
        let err = StoreConfig::from_lookup(lookup(&[(ENV_TRANSITIONS, "backwards")])).unwrap_err();
        assert_eq!(err.key, ENV_TRANSITIONS);

        let err = StoreConfig::from_lookup(lookup(&[(ENV_MAX_IMAGE_BYTES, "lots")])).unwrap_err();
        assert_eq!(err.key, ENV_MAX_IMAGE_BYTES);
        assert_eq!(err.value, "lots");
    }
}
