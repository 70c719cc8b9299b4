//! User-facing notifications.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn prefix(self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
            NotificationKind::Info => "ℹ️",
        }
    }
}

/// A message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.kind.prefix(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_carries_the_kind_prefix() {
        assert_eq!(Notification::error("Login failed").text(), "❌ Login failed");
        assert_eq!(Notification::info("Trading stopped").text(), "ℹ️ Trading stopped");
        assert_eq!(
            Notification::success("Trading started for NIFTY").text(),
            "✅ Trading started for NIFTY"
        );
    }
}
