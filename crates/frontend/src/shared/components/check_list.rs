use leptos::prelude::*;

/// Adds or removes `value`, preserving the order of the other entries.
pub fn toggle_selection(current: &[String], value: &str, checked: bool) -> Vec<String> {
    let mut next: Vec<String> = current.iter().filter(|v| *v != value).cloned().collect();
    if checked {
        next.push(value.to_string());
    }
    next
}

/// Группа чекбоксов для фильтров с несколькими значениями
#[component]
pub fn CheckList(
    /// `(value, label)`
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(optional, into)]
    empty_text: String,
) -> impl IntoView {
    view! {
        <div class="check-list">
            {move || {
                let items = options.get();
                if items.is_empty() {
                    return view! { <span class="check-list__empty">{empty_text.clone()}</span> }.into_any();
                }
                items
                    .into_iter()
                    .map(|(value, label)| {
                        let value_for_checked = value.clone();
                        view! {
                            <label class="check-list__option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.with(|s| s.contains(&value_for_checked))
                                    on:change=move |ev| {
                                        let next = toggle_selection(
                                            &selected.get_untracked(),
                                            &value,
                                            event_target_checked(&ev),
                                        );
                                        on_change.run(next);
                                    }
                                />
                                {label}
                            </label>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selection() {
        let current = vec!["1".to_string(), "2".to_string()];
        assert_eq!(toggle_selection(&current, "3", true), vec!["1", "2", "3"]);
        assert_eq!(toggle_selection(&current, "1", false), vec!["2"]);
        assert_eq!(toggle_selection(&current, "2", true), vec!["1", "2"]);
    }
}
