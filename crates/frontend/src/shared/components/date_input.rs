use leptos::prelude::*;

/// Native date picker bound to a `YYYY-MM-DD` value; empty string means no date.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<String>,
    /// Receives the new value in `YYYY-MM-DD` format ("" when cleared)
    on_change: Callback<String>,
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    view! {
        <label class="form__field form__field--date">
            {(!label.is_empty()).then(|| view! { <span class="form__label">{label}</span> })}
            <input
                type="date"
                class="form__input"
                prop:value=value
                on:change=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}
