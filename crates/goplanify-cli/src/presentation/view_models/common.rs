use serde::Serialize;

/// Headline printed above a command's content
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn new(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, label)
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, label)
    }

    /// Command succeeded but the data may be incomplete or stale
    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, label)
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
        }
    }
}

/// Failures never get a badge: they exit non-zero with a message on stderr.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
}

/// Follow-up command suggested under the tips
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    pub command: String,
}

impl Guidance {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_serializes_level_and_label() {
        let badge = StatusBadge::warning("Trip list may be stale: offline");
        let json = serde_json::to_value(&badge).unwrap();

        assert_eq!(json["level"], "warning");
        assert_eq!(json["label"], "Trip list may be stale: offline");
        assert_eq!(badge.icon(), "⚠️");
    }
}
