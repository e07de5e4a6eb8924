use crate::shared::config::app_config;
use crate::shared::debounce::Debouncer;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Поле поиска с debounce: `on_change` получает только последнее значение
/// серии нажатий. Enter и кнопка очистки срабатывают сразу.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (из состояния списка)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    let debouncer = StoredValue::new(Debouncer::new());

    // Сброс фильтра снаружи (например, "Clear filters") обновляет поле
    // и отменяет ещё не отправленный ввод
    Effect::new(move |_| {
        let external = value.get();
        if let Some(text) = external_update(&input_value.get_untracked(), &external) {
            debouncer.with_value(|d| d.cancel());
            input_value.set(text);
        }
    });

    let handle_input = move |text: String| {
        input_value.set(text.clone());
        let debouncer = debouncer.get_value();
        let delay = app_config().search_debounce_ms;
        spawn_local(async move {
            if debouncer.settle(delay).await {
                on_change.run(text);
            }
        });
    };

    let submit_now = move || {
        debouncer.with_value(|d| d.cancel());
        on_change.run(input_value.get_untracked());
    };

    let clear = move |_| {
        debouncer.with_value(|d| d.cancel());
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="search"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit_now();
                    }
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    "×"
                </button>
            </Show>
        </div>
    }
}

/// New text for the field when the filter changed from outside, `None` when
/// the field already shows it.
fn external_update(local: &str, external: &str) -> Option<String> {
    if local.trim() == external {
        None
    } else {
        Some(external.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_update() {
        assert_eq!(external_update("shirt ", "shirt"), None);
        assert_eq!(external_update("", ""), None);
        assert_eq!(external_update("shirt", ""), Some(String::new()));
        assert_eq!(external_update("", "cap"), Some("cap".to_string()));
    }
}
