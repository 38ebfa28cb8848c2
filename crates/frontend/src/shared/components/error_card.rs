use leptos::prelude::*;

/// Inline error block; renders nothing while the message is absent.
#[component]
pub fn ErrorCard(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|err| {
            view! {
                <div class="error-card">
                    <span class="error-card__icon">"⚠"</span>
                    <span>{err}</span>
                </div>
            }
        })
    }
}
