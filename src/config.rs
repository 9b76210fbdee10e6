//! User settings: defaults, then an optional TOML file, then `ISSUE_TREE_*` env vars.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use smart_default::SmartDefault;

use crate::children::ExtractOptions;

pub const APP_NAME: &str = "issue_tree";
pub const ENV_PREFIX: &str = "ISSUE_TREE";

#[derive(Clone, Debug, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct Settings {
	/// Heading labels that introduce a legacy children list, on top of the built-in ones.
	pub children_headings: Vec<String>,
	/// Check legacy HTML hrefs against `github.com` too.
	pub strict_legacy_hosts: bool,
	/// Where diagnostics' section anchors point into.
	#[default(_code = r#"String::from("https://github.com/issue-tree/issue-tree/blob/main/docs/user-guide.md")"#)]
	pub user_guide_url: String,
}

#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to load settings")]
	#[diagnostic(code(issue_tree::config::load))]
	Load(#[from] config::ConfigError),

	#[error("children_headings[{index}] is empty")]
	#[diagnostic(code(issue_tree::config::empty_heading), help("remove the entry or give it a label"))]
	EmptyHeading { index: usize },
}

impl Settings {
	/// Load settings, reading `path` if given, else the XDG config file if one exists.
	/// An explicitly passed file must exist.
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let mut builder = config::Config::builder();
		match path {
			Some(path) => builder = builder.add_source(config::File::from(path).required(true)),
			None =>
				if let Some(path) = default_config_path() {
					tracing::debug!("[config] using {}", path.display());
					builder = builder.add_source(config::File::from(path).required(false));
				},
		}
		let settings: Self = builder
			.add_source(
				config::Environment::with_prefix(ENV_PREFIX)
					.try_parsing(true)
					.list_separator(",")
					.with_list_parse_key("children_headings"),
			)
			.build()?
			.try_deserialize()?;
		settings.validate()?;
		Ok(settings)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		match self.children_headings.iter().position(|h| h.trim().is_empty()) {
			Some(index) => Err(ConfigError::EmptyHeading { index }),
			None => Ok(()),
		}
	}

	pub fn extract_options(&self) -> ExtractOptions {
		ExtractOptions {
			extra_headings: self.children_headings.clone(),
			strict_legacy_hosts: self.strict_legacy_hosts,
		}
	}
}

/// `$XDG_CONFIG_HOME/issue_tree/config.toml`, if present.
pub fn default_config_path() -> Option<PathBuf> {
	xdg::BaseDirectories::with_prefix(APP_NAME).find_config_file("config.toml")
}
