use leptos::prelude::*;

/// Native date picker bound to a `YYYY-MM-DD` value
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<String>,
    /// Receives the new value in `YYYY-MM-DD` format, empty when cleared
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)]
    min: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form-control date-input"
            prop:value=value
            min=min
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
