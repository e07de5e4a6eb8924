//! Выбор магазина: одиночный (`StoreSelect`) и множественный (`StoreMultiSelect`)

use super::check_list::CheckList;
use contracts::domain::a001_store::Store;
use leptos::prelude::*;

/// `(value, label)` для каждого магазина: value = id, label = name
pub fn store_options(stores: &[Store]) -> Vec<(String, String)> {
    stores
        .iter()
        .map(|s| (s.id.to_string(), s.name.clone()))
        .collect()
}

#[component]
pub fn StoreSelect(
    #[prop(into)]
    stores: Signal<Vec<Store>>,
    /// Выбранный id ("" - ничего не выбрано)
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Текст пустого варианта; `None` - без пустого варианта
    #[prop(optional, into)]
    empty_label: Option<String>,
) -> impl IntoView {
    view! {
        <select
            class="form__select store-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {empty_label.map(|label| view! { <option value="">{label}</option> })}
            {move || {
                store_options(&stores.get())
                    .into_iter()
                    .map(|(id, name)| {
                        let selected_id = id.clone();
                        view! {
                            <option value=id selected=move || value.get() == selected_id>
                                {name}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

#[component]
pub fn StoreMultiSelect(
    #[prop(into)]
    stores: Signal<Vec<Store>>,
    /// Выбранные id
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let options = Signal::derive(move || stores.with(|s| store_options(s)));
    view! {
        <div class="store-multi-select">
            <span class="form__label">"Stores"</span>
            <CheckList options=options selected=selected on_change=on_change empty_text="No stores configured" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_store_option() {
        let stores: Vec<Store> = serde_json::from_str(r#"[{"id":1,"name":"Main Store"}]"#).unwrap();
        let options = store_options(&stores);
        assert_eq!(options, vec![("1".to_string(), "Main Store".to_string())]);
    }

    #[test]
    fn test_no_stores() {
        assert!(store_options(&[]).is_empty());
    }
}
