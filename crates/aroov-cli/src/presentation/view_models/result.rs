use aroov_runtime::DocumentSnapshot;
use serde::Serialize;

use super::common::{Guidance, StatusBadge};

/// Envelope every command renders: the content plus an optional badge and
/// tips.
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

    /// The page as the controllers left it, for `--format html`.
    #[serde(skip)]
    pub page: Option<DocumentSnapshot>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
            page: None,
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }

    pub fn with_page(mut self, page: DocumentSnapshot) -> Self {
        self.page = Some(page);
        self
    }
}
