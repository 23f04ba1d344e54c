use serde::Serialize;

use super::common::{Guidance, StatusBadge, StatusLevel};

/// Envelope for every console command.
///
/// Every agdeck result states its outcome up front, so the badge-taking
/// constructors are the usual entry point; `plain` is for results that
/// speak for themselves, such as an existing config file.
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn plain(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(content: T, badge: StatusBadge) -> Self {
        Self {
            badge: Some(badge),
            ..Self::plain(content)
        }
    }

    pub fn success(content: T, label: impl Into<String>) -> Self {
        Self::with_badge(content, StatusBadge::success(label))
    }

    pub fn info(content: T, label: impl Into<String>) -> Self {
        Self::with_badge(content, StatusBadge::info(label))
    }

    /// Nothing to show yet; pair with tips on how to get data in
    pub fn warning(content: T, label: impl Into<String>) -> Self {
        Self::with_badge(content, StatusBadge::warning(label))
    }

    /// Tip without a command to run
    pub fn with_note(mut self, description: impl Into<String>) -> Self {
        self.suggestions.push(Guidance::new(description));
        self
    }

    /// Tip pointing at an `agdeck` invocation
    pub fn with_tip(mut self, description: impl Into<String>, command: impl Into<String>) -> Self {
        self.suggestions
            .push(Guidance::new(description).with_command(command));
        self
    }

    pub fn level(&self) -> Option<StatusLevel> {
        self.badge.as_ref().map(|badge| badge.level)
    }
}
