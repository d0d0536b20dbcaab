use std::time::Duration;

use leptos::*;

/// How long a notice stays on screen.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    seq: u64,
}

/// At most one transient notice at a time.
///
/// Every notice gets a sequence number so that the expiry of an already
/// replaced notice cannot hide its successor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_seq: u64,
}

impl NoticeBoard {
    /// Replace the current notice and return the new sequence number.
    pub fn show(&mut self, kind: NoticeKind, text: String) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.current = Some(Notice { kind, text, seq });
        seq
    }

    /// Clear the notice, unless a newer one has replaced it meanwhile.
    pub fn expire(&mut self, seq: u64) {
        if self.current.as_ref().map(|n| n.seq) == Some(seq) {
            self.current = None;
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// Show a notice and schedule its expiry.
pub fn show_notice(notices: RwSignal<NoticeBoard>, kind: NoticeKind, text: String) {
    let Some(seq) = notices.try_update(|board| board.show(kind, text)) else {
        return;
    };
    set_timeout(
        move || {
            notices.update(|board| board.expire(seq));
        },
        NOTICE_TIMEOUT,
    );
}

#[component]
pub fn NoticeView(notices: RwSignal<NoticeBoard>) -> impl IntoView {
    move || {
        notices.with(|board| board.current().cloned()).map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "mb-4 rounded-md bg-green-50 p-4 text-green-700",
                NoticeKind::Error => "mb-4 rounded-md bg-red-50 p-4 text-red-700",
            };
            view! {
              <p class=class>{ notice.text }</p>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_current_notice() {
        let mut board = NoticeBoard::default();
        board.show(NoticeKind::Success, "Signed up".into());
        board.show(NoticeKind::Error, "Already signed up".into());
        let current = board.current().unwrap();
        assert_eq!(current.kind, NoticeKind::Error);
        assert_eq!(current.text, "Already signed up");
    }

    #[test]
    fn notice_expires_after_its_window() {
        let mut board = NoticeBoard::default();
        let seq = board.show(NoticeKind::Success, "Signed up".into());
        board.expire(seq);
        assert!(board.current().is_none());
    }

    #[test]
    fn stale_expiry_keeps_newer_notice() {
        let mut board = NoticeBoard::default();
        let stale = board.show(NoticeKind::Success, "Signed up".into());
        board.show(NoticeKind::Success, "Unregistered".into());
        board.expire(stale);
        assert_eq!(board.current().unwrap().text, "Unregistered");
    }
}
