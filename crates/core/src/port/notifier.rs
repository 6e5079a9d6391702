// User feedback port (modal pop-ups)

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Message shown to the user in a pop-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Feedback channel to the user
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;

    /// Notifier that records every notice in order
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub notices: Vec<Notice>,
    }

    impl RecordingNotifier {
        pub fn last(&self) -> Option<&Notice> {
            self.notices.last()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }
}
