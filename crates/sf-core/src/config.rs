//! Configuration resolution: migrations-home and migration.properties
//!
//! Resolution is explicit and happens once at startup: a [`Lookup`] provider
//! supplies environment values, [`Config::resolve`] reads them and loads the
//! properties file, and the resulting [`Config`] value is threaded through
//! the rest of the tool. Nothing in this module reads ambient process state
//! after that point.

use crate::error::{CoreError, CoreResult};
use crate::util::file_in;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the migrations-home directory
const MIGRATIONS_HOME: &str = "MIGRATIONS_HOME";

/// Preferred property key for the migrations-home directory
const MIGRATIONS_HOME_PROPERTY: &str = "migrationsHome";

/// Deprecated alias, still honored. TODO: drop in the next breaking release.
const MIGRATIONS_HOME_PROPERTY_DEPRECATED: &str = "migrationHome";

/// File name of the properties file inside migrations-home
const MIGRATIONS_PROPERTIES: &str = "migration.properties";

/// Provider of named environment values.
///
/// The default implementation reads the process environment; tests supply a
/// map-backed implementation so resolution stays deterministic.
pub trait Lookup {
    /// Return the value for `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// [`Lookup`] over the real process environment
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Lookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Resolve the migrations-home directory.
///
/// Checks, in order: the `MIGRATIONS_HOME` environment value, the
/// `migrationsHome` property, then the deprecated `migrationHome` alias.
/// The first non-empty hit wins; empty values count as absent.
pub fn migrations_home(lookup: &dyn Lookup) -> Option<PathBuf> {
    let home = lookup
        .get(MIGRATIONS_HOME)
        .filter(|v| !v.is_empty())
        .or_else(|| lookup.get(MIGRATIONS_HOME_PROPERTY).filter(|v| !v.is_empty()))
        .or_else(|| {
            lookup
                .get(MIGRATIONS_HOME_PROPERTY_DEPRECATED)
                .filter(|v| !v.is_empty())
                .inspect(|_| {
                    log::warn!(
                        "'{}' is deprecated. Use '{}' instead.",
                        MIGRATIONS_HOME_PROPERTY_DEPRECATED,
                        MIGRATIONS_HOME_PROPERTY
                    );
                })
        })?;
    Some(PathBuf::from(home))
}

/// Flat `key=value` properties map
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Load properties from a file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CoreError::IoWithPath {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Parse properties text leniently.
    ///
    /// Blank lines and lines starting with `#` or `!` are skipped. Each
    /// remaining line is split at the first `=`; the key is trimmed and the
    /// value keeps everything after the separator minus leading whitespace.
    /// A line without `=` becomes a key with an empty value. Duplicate keys
    /// keep the last value seen.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            match trimmed.split_once('=') {
                Some((key, value)) => {
                    entries.insert(key.trim().to_string(), value.trim_start().to_string());
                }
                None => {
                    entries.insert(trimmed.to_string(), String::new());
                }
            }
        }
        Self { entries }
    }

    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Resolved tool configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    migrations_home: Option<PathBuf>,
    properties: Properties,
}

impl Config {
    /// Resolve the configuration from a lookup provider.
    ///
    /// Property lookups are fail-soft: a missing home directory, a missing
    /// properties file, or an unreadable one all yield an empty map rather
    /// than an error.
    pub fn resolve(lookup: &dyn Lookup) -> Self {
        let migrations_home = migrations_home(lookup);
        let properties = match &migrations_home {
            Some(home) => {
                let path = file_in(home, MIGRATIONS_PROPERTIES);
                match Properties::load(&path) {
                    Ok(properties) => properties,
                    Err(e) => {
                        log::debug!("No usable properties file at {}: {}", path.display(), e);
                        Properties::default()
                    }
                }
            }
            None => Properties::default(),
        };
        Self {
            migrations_home,
            properties,
        }
    }

    /// The resolved migrations-home directory, if any
    pub fn migrations_home(&self) -> Option<&Path> {
        self.migrations_home.as_deref()
    }

    /// The loaded properties map
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Look up a property option. Absent file or key yields `None`.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    /// Look up a boolean property option.
    ///
    /// `true` only when the value equals `"true"` case-insensitively;
    /// absent or unparseable values are `false`.
    pub fn option_bool(&self, key: &str) -> bool {
        self.option(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
