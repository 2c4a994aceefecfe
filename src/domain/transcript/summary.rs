//! Summary and action-item parsing

/// Literal marker separating the prose summary from the action-item list.
/// The server emits it verbatim; the split is on the first occurrence only.
pub const ACTION_ITEMS_MARKER: &str = "Action Items:";

/// A summary split into its prose part and the individual action items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryAndActions {
    summary: String,
    action_items: Vec<String>,
}

impl SummaryAndActions {
    /// Split a raw summary on the `Action Items:` marker.
    ///
    /// Everything before the first marker is the summary. Each non-blank
    /// line after it becomes one action item, with any leading `- ` bullet
    /// and `**` emphasis stripped. Text without the marker is all summary.
    pub fn parse(text: &str) -> Self {
        match text.split_once(ACTION_ITEMS_MARKER) {
            Some((summary, actions)) => Self {
                summary: summary.trim().to_string(),
                action_items: actions
                    .lines()
                    .map(Self::clean_item)
                    .filter(|item| !item.is_empty())
                    .collect(),
            },
            None => Self {
                summary: text.trim().to_string(),
                action_items: Vec::new(),
            },
        }
    }

    /// Strip bullet and emphasis markers from one action-item line
    fn clean_item(line: &str) -> String {
        let trimmed = line.trim();
        let without_bullet = trimmed
            .strip_prefix('-')
            .map(str::trim_start)
            .unwrap_or(trimmed);
        without_bullet.replace("**", "")
    }

    /// The prose summary before the marker
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// The cleaned action items, in server order
    pub fn action_items(&self) -> &[String] {
        &self.action_items
    }

    /// Whether the text contained an action-item section with entries
    pub fn has_action_items(&self) -> bool {
        !self.action_items.is_empty()
    }
}
