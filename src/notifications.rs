use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::Reducible;

/// Both the primary alert overlay and the inline newsletter message stay up
/// for 5 seconds before their dismiss timer removes them.
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Fixed-position alert overlay. Alerts stack in arrival order and are not
/// deduplicated; each is removed by its own timer (or by an explicit
/// dismiss), never by a newcomer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertStack {
    next_id: u64,
    entries: Vec<Notification>,
}

impl AlertStack {
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Notification {
            id,
            kind,
            text: text.into(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}

pub enum AlertAction {
    Push(NotificationKind, String),
    Dismiss(u64),
}

impl Reducible for AlertStack {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut stack = (*self).clone();
        match action {
            AlertAction::Push(kind, text) => {
                stack.push(kind, text);
            }
            AlertAction::Dismiss(id) => {
                stack.dismiss(id);
            }
        }
        stack.into()
    }
}

/// The newsletter form's single inline message slot: a new message replaces
/// any unexpired one. An expiry only lands if its id still matches, so a
/// replaced message's timer cannot take down its successor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineSlot {
    next_id: u64,
    current: Option<Notification>,
}

impl InlineSlot {
    pub fn show(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            kind,
            text: text.into(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

pub enum InlineAction {
    Show(NotificationKind, String),
    Expire(u64),
}

impl Reducible for InlineSlot {
    type Action = InlineAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut slot = (*self).clone();
        match action {
            InlineAction::Show(kind, text) => {
                slot.show(kind, text);
            }
            InlineAction::Expire(id) => slot.expire(id),
        }
        slot.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alerts_stack_without_dedup() {
        let mut stack = AlertStack::default();
        let first = stack.push(NotificationKind::Success, "done");
        let second = stack.push(NotificationKind::Success, "done");
        assert_ne!(first, second);
        assert_eq!(stack.entries().len(), 2);
        assert!(stack.entries().iter().all(|n| n.text == "done"));
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut stack = AlertStack::default();
        let first = stack.push(NotificationKind::Error, "a");
        let second = stack.push(NotificationKind::Success, "b");
        assert!(stack.dismiss(first));
        assert_eq!(stack.entries().len(), 1);
        assert_eq!(stack.entries()[0].id, second);
        assert!(!stack.dismiss(first));
    }

    #[test]
    fn inline_message_replaces_prior() {
        let mut slot = InlineSlot::default();
        let first = slot.show(NotificationKind::Error, "Please enter a valid email address.");
        let second = slot.show(NotificationKind::Success, "Successfully subscribed!");
        assert_ne!(first, second);
        assert_eq!(
            slot.current().map(|n| n.text.as_str()),
            Some("Successfully subscribed!")
        );
    }

    #[test]
    fn stale_expiry_is_a_no_op() {
        let mut slot = InlineSlot::default();
        let first = slot.show(NotificationKind::Error, "old");
        let second = slot.show(NotificationKind::Success, "new");
        slot.expire(first);
        assert!(slot.current().is_some());
        slot.expire(second);
        assert!(slot.current().is_none());
    }
}
