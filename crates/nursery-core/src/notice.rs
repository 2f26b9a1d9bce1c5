//! User Notices
//!
//! Short messages shown to the user as transient toasts.

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeVariant {
    #[default]
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    /// Report a failed operation using the error's user-facing message
    pub fn from_error(title: impl Into<String>, err: &Error) -> Self {
        Self::destructive(title, err.user_message())
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_is_destructive() {
        let err = Error::Service {
            status: 409,
            message: "Email already registered".to_string(),
        };
        let notice = Notice::from_error("Registration failed", &err);
        assert!(notice.is_destructive());
        assert_eq!(notice.title, "Registration failed");
        assert_eq!(notice.description, "Email already registered");
    }

    #[test]
    fn test_info_notice() {
        let notice = Notice::info("Plant added", "Saved");
        assert!(!notice.is_destructive());
        assert_eq!(notice.variant, NoticeVariant::default());
    }
}
