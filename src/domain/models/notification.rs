#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: &str, description: &str) -> Notification {
        return Notification {
            level: NotificationLevel::Success,
            title: title.to_string(),
            description: description.to_string(),
        };
    }

    pub fn error(title: &str, description: &str) -> Notification {
        return Notification {
            level: NotificationLevel::Error,
            title: title.to_string(),
            description: description.to_string(),
        };
    }
}
