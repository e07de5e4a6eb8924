//! Чекбокс «выбрать все» в заголовке таблицы

use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Состояние общего чекбокса по числу выбранных строк из `total`
pub fn checkbox_state(selected: usize, total: usize) -> CheckboxState {
    if total == 0 || selected == 0 {
        CheckboxState::Unchecked
    } else if selected >= total {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Показывает три состояния; клик отдаёт `true` (выбрать все) или `false` (снять все)
#[component]
pub fn TableHeaderCheckbox(
    /// Сколько строк отмечено
    #[prop(into)]
    selected_count: Signal<usize>,
    /// Сколько строк можно отметить
    #[prop(into)]
    total_count: Signal<usize>,
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || checkbox_state(selected_count.get(), total_count.get()));
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(state.get() == CheckboxState::Indeterminate);
        }
    });

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == CheckboxState::Checked
                prop:disabled=move || total_count.get() == 0
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_state() {
        assert_eq!(checkbox_state(0, 0), CheckboxState::Unchecked);
        assert_eq!(checkbox_state(0, 5), CheckboxState::Unchecked);
        assert_eq!(checkbox_state(2, 5), CheckboxState::Indeterminate);
        assert_eq!(checkbox_state(5, 5), CheckboxState::Checked);
    }
}
