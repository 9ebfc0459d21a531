//! # Project Configuration
//!
//! Static links shown by the shell chrome: author and program homepages in the
//! footer, source repository in the header.
//!
//! A WASM bundle has no process environment at runtime, so values are baked in
//! at compile time from these variables, falling back to the defaults below:
//!
//! | Variable                 | Field              |
//! |--------------------------|--------------------|
//! | `SHELL_AUTHOR_NAME`      | `author_name`      |
//! | `SHELL_AUTHOR_HOMEPAGE`  | `author_homepage`  |
//! | `SHELL_PROGRAM_NAME`     | `program_name`     |
//! | `SHELL_PROGRAM_HOMEPAGE` | `program_homepage` |
//! | `SHELL_REPOSITORY_URL`   | `repository_url`   |
//!
//! Use [`project_info()`] to access the global instance.

use std::sync::OnceLock;

use thiserror::Error;

use crate::layout::footer::StaticLink;

const DEFAULT_AUTHOR_NAME: &str = "Jimmy Chu";
const DEFAULT_AUTHOR_HOMEPAGE: &str = "https://github.com/jimmychu0807";
const DEFAULT_PROGRAM_NAME: &str = "PSE Core Program";
const DEFAULT_PROGRAM_HOMEPAGE: &str = "https://pse.dev";
const DEFAULT_REPOSITORY_URL: &str = "https://github.com/jimmychu0807";

/// Label of the header's source-repository link.
pub const REPOSITORY_LABEL: &str = "Github repository";

/// Links and labels rendered by the header and footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectInfo {
    pub author_name: String,
    pub author_homepage: String,
    pub program_name: String,
    pub program_homepage: String,
    pub repository_url: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            author_name: DEFAULT_AUTHOR_NAME.to_string(),
            author_homepage: DEFAULT_AUTHOR_HOMEPAGE.to_string(),
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
            program_homepage: DEFAULT_PROGRAM_HOMEPAGE.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }
}

impl ProjectInfo {
    /// Build from compile-time environment overrides.
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            author_name: option_env!("SHELL_AUTHOR_NAME").map_or(defaults.author_name, String::from),
            author_homepage: option_env!("SHELL_AUTHOR_HOMEPAGE")
                .map_or(defaults.author_homepage, String::from),
            program_name: option_env!("SHELL_PROGRAM_NAME").map_or(defaults.program_name, String::from),
            program_homepage: option_env!("SHELL_PROGRAM_HOMEPAGE")
                .map_or(defaults.program_homepage, String::from),
            repository_url: option_env!("SHELL_REPOSITORY_URL")
                .map_or(defaults.repository_url, String::from),
        }
    }

    /// Check that labels are non-empty and links are absolute http(s) URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("author_name", &self.author_name), ("program_name", &self.program_name)] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyLabel(field));
            }
        }

        for (field, value) in [
            ("author_homepage", &self.author_homepage),
            ("program_homepage", &self.program_homepage),
            ("repository_url", &self.repository_url),
        ] {
            let rest = value
                .strip_prefix("https://")
                .or_else(|| value.strip_prefix("http://"));
            if rest.map_or(true, str::is_empty) {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn author_link(&self) -> StaticLink {
        StaticLink::new(&self.author_name, &self.author_homepage)
    }

    pub fn program_link(&self) -> StaticLink {
        StaticLink::new(&self.program_name, &self.program_homepage)
    }

    pub fn repository_link(&self) -> StaticLink {
        StaticLink::new(REPOSITORY_LABEL, &self.repository_url)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyLabel(&'static str),

    #[error("{field} is not an absolute http(s) URL: {value:?}")]
    InvalidUrl { field: &'static str, value: String },
}

static PROJECT_INFO: OnceLock<ProjectInfo> = OnceLock::new();

/// Global project configuration, built on first access.
pub fn project_info() -> &'static ProjectInfo {
    PROJECT_INFO.get_or_init(ProjectInfo::from_build_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(ProjectInfo::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_relative_url() {
        let info = ProjectInfo {
            program_homepage: "pse.dev".into(),
            ..ProjectInfo::default()
        };
        assert_eq!(
            info.validate(),
            Err(ConfigError::InvalidUrl {
                field: "program_homepage",
                value: "pse.dev".into()
            })
        );
    }

    #[test]
    fn test_rejects_bare_scheme() {
        let info = ProjectInfo {
            repository_url: "https://".into(),
            ..ProjectInfo::default()
        };
        assert!(matches!(
            info.validate(),
            Err(ConfigError::InvalidUrl { field: "repository_url", .. })
        ));
    }

    #[test]
    fn test_rejects_blank_label() {
        let info = ProjectInfo {
            author_name: "  ".into(),
            ..ProjectInfo::default()
        };
        assert_eq!(info.validate(), Err(ConfigError::EmptyLabel("author_name")));
        assert_eq!(
            info.validate().unwrap_err().to_string(),
            "author_name must not be empty"
        );
    }

    #[test]
    fn test_links() {
        let info = ProjectInfo::default();
        assert_eq!(info.repository_link().label, REPOSITORY_LABEL);
        assert_eq!(info.repository_link().url, info.repository_url);
        assert_eq!(info.author_link().label, info.author_name);
        assert_eq!(info.program_link().url, info.program_homepage);
    }
}
