//! Configuration file loading.
//!
//! ```toml
//! endpoint = "https://forum.example.com"
//! trigger = "#"
//! type_order = ["category", "tag"]
//!
//! [search]
//! debounce_ms = 250
//! timeout_ms = 5000
//! cache_ttl_secs = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use taglink_hashtag::SessionConfig;
use taglink_primitives::TypeOrder;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
	pub endpoint: Option<String>,
	pub trigger: Option<char>,
	pub type_order: Option<TypeOrder>,
	pub test_mode: Option<bool>,
	#[serde(default)]
	pub search: SearchSection,
}

/// The `[search]` table.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
	pub debounce_ms: Option<u64>,
	pub timeout_ms: Option<u64>,
	pub cache_ttl_secs: Option<u64>,
}

impl FileConfig {
	/// Loads `explicit` if given, otherwise the default file when it exists.
	///
	/// An explicit path that cannot be read is an error; a missing default
	/// file yields an empty configuration.
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		match explicit {
			Some(path) => Self::from_path(path),
			None => match default_path() {
				Some(path) if path.is_file() => Self::from_path(&path),
				_ => Ok(Self::default()),
			},
		}
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let raw = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
		Self::parse(&raw).with_context(|| format!("parsing config {}", path.display()))
	}

	pub fn parse(raw: &str) -> Result<Self> {
		Ok(toml::from_str(raw)?)
	}

	/// Session settings, with defaults for everything left unset.
	pub fn session_config(&self) -> SessionConfig {
		let mut config = SessionConfig::default();
		if let Some(trigger) = self.trigger {
			config.trigger = trigger;
		}
		if let Some(order) = &self.type_order {
			config.type_order = order.clone();
		}
		if let Some(test_mode) = self.test_mode {
			config.search.test_mode = test_mode;
		}
		if let Some(ms) = self.search.debounce_ms {
			config.search.debounce = Duration::from_millis(ms);
		}
		if let Some(ms) = self.search.timeout_ms {
			config.search.timeout = Duration::from_millis(ms);
		}
		if let Some(secs) = self.search.cache_ttl_secs {
			config.search.cache_ttl = Duration::from_secs(secs);
		}
		config
	}

	/// Picks the endpoint, preferring the command-line value.
	pub fn endpoint(&self, flag: Option<&str>) -> Result<String> {
		flag.or(self.endpoint.as_deref())
			.map(str::to_owned)
			.context("no endpoint configured; pass --endpoint or set `endpoint` in the config file")
	}
}

/// `$XDG_CONFIG_HOME/taglink/config.toml` (or the platform equivalent).
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("taglink").join("config.toml"))
}
