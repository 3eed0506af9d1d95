use std::time::Duration;
use std::time::Instant;

use super::Notifications;
use crate::domain::models::Notification;

#[test]
fn it_lists_newest_first() {
    let mut notifications = Notifications::new(Duration::from_millis(5000));
    notifications.push(Notification::error("First", "one"));
    notifications.push(Notification::success("Second", "two"));

    let titles = notifications
        .visible()
        .iter()
        .map(|notification| return notification.title.to_string())
        .collect::<Vec<String>>();

    assert_eq!(titles, vec!["Second".to_string(), "First".to_string()]);
}

#[test]
fn it_prunes_expired_entries() {
    let now = Instant::now();
    let mut notifications = Notifications::new(Duration::from_millis(5000));
    notifications.push_at(Notification::error("Old", ""), now);
    notifications.push_at(
        Notification::error("New", ""),
        now + Duration::from_millis(3000),
    );

    notifications.prune(now + Duration::from_millis(4999));
    assert_eq!(notifications.len(), 2);

    notifications.prune(now + Duration::from_millis(5000));
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications.visible()[0].title, "New");

    notifications.prune(now + Duration::from_millis(9000));
    assert!(notifications.is_empty());
}
