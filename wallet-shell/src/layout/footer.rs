//! Footer projection.

use crate::config::ProjectInfo;

/// External link rendered with a fixed label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticLink {
    pub label: String,
    pub url: String,
}

impl StaticLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Attribution footer, pinned to the bottom of the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterModel {
    pub author: StaticLink,
    pub program: StaticLink,
}

impl FooterModel {
    pub const MADE_BY: &'static str = "Made with ❤️ by";
    pub const PROGRAM_PREFIX: &'static str = "| Capstone Project of";

    pub fn project(info: &ProjectInfo) -> Self {
        Self {
            author: info.author_link(),
            program: info.program_link(),
        }
    }

    /// Flattened attribution text, as read by a screen reader.
    pub fn attribution(&self) -> String {
        format!(
            "{} {} {} {}",
            Self::MADE_BY,
            self.author.label,
            Self::PROGRAM_PREFIX,
            self.program.label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_uses_project_links() {
        let info = ProjectInfo {
            author_name: "Ada".into(),
            author_homepage: "https://ada.example".into(),
            program_name: "Core Program".into(),
            program_homepage: "https://program.example".into(),
            repository_url: "https://git.example/ada/shell".into(),
        };
        let footer = FooterModel::project(&info);
        assert_eq!(footer.author, StaticLink::new("Ada", "https://ada.example"));
        assert_eq!(footer.program, StaticLink::new("Core Program", "https://program.example"));
        assert_eq!(
            footer.attribution(),
            "Made with ❤️ by Ada | Capstone Project of Core Program"
        );
    }
}
