//! Transient notification for volunteer form submission outcomes.
//!
//! Renders `VolunteerForm::notice` of the enclosing volunteer page. In the browser each new notice is
//! dismissed automatically after `AUTO_DISMISS_MS`; a dismiss timer only
//! clears the notice it was started for.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use volunteer::{NoticeKind, VolunteerForm};

pub const AUTO_DISMISS_MS: u64 = 5_000;

pub fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Error => "toast toast--error",
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let form = expect_context::<RwSignal<VolunteerForm>>();
    let notice = Memo::new(move |_| form.with(|f| f.notice.clone()));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(current) = notice.get() {
            let seq = current.seq;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
                form.update(|f| f.dismiss_notice_seq(seq));
            });
        }
    });

    view! {
        {move || {
            notice
                .get()
                .map(|n| {
                    view! {
                        <div class=toast_class(n.kind) role="status" aria-live="polite">
                            <div class="toast__text">
                                <p class="toast__title">{n.title}</p>
                                <p class="toast__description">{n.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                type="button"
                                aria-label="Dismiss notification"
                                on:click=move |_| form.update(VolunteerForm::dismiss_notice)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
