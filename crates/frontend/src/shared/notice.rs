//! Transient notifications shown after import/export actions
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Single notice slot; a newer notice replaces the current one and
/// restarts the countdown.
#[derive(Clone, Copy)]
pub struct NoticeSlot {
    current: RwSignal<Option<(u64, Notice)>>,
    seq: StoredValue<u64>,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            seq: StoredValue::new(0),
        }
    }

    /// No-op once the owning page is gone; a request may finish after
    /// the user has navigated away.
    pub fn show(&self, notice: Notice) {
        let Some(id) = self.seq.try_update_value(|seq| {
            *seq += 1;
            *seq
        }) else {
            return;
        };
        if self.current.try_set(Some((id, notice))).is_some() {
            return;
        }

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            current.try_update(|slot| {
                if matches!(slot, Some((shown, _)) if *shown == id) {
                    *slot = None;
                }
            });
        });
    }

    pub fn dismiss(&self) {
        let _ = self.current.try_set(None);
    }

    pub fn get(&self) -> Option<Notice> {
        self.current.get().map(|(_, notice)| notice)
    }
}

impl Default for NoticeSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NoticeBanner(slot: NoticeSlot) -> impl IntoView {
    move || {
        slot.get().map(|notice| {
            let class = if notice.is_error() {
                "warning-box warning-box--error"
            } else {
                "warning-box warning-box--success"
            };
            view! {
                <div class=class role="status" on:click=move |_| slot.dismiss()>
                    <span class="warning-box__text">{notice.message}</span>
                </div>
            }
        })
    }
}
