//! 提示消息
//!
//! `ToastService` 实现核心库的 `Notifier`，每条消息在配置的时长后自动消失。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use mappoints::{NoticeKind, Notifier};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    message: String,
    kind: NoticeKind,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, message: &str, kind: NoticeKind) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                message: message.to_string(),
                kind,
            })
        });

        let service = *self;
        Timeout::new(self.duration_ms, move || service.dismiss(id)).forget();
    }
}

pub fn provide_toasts(duration_ms: u32) -> ToastService {
    let service = ToastService::new(duration_ms);
    provide_context(service);
    service
}

/// 右上角的提示堆叠
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = expect_context::<ToastService>();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        NoticeKind::Success => "alert alert-success shadow-lg",
                        NoticeKind::Error => "alert alert-error shadow-lg",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
