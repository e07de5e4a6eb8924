use crate::shared::icons::icon;
use crate::shared::list_view::{PageInfo, PageMove};
use leptos::prelude::*;

/// Pagination bar: first/prev/next/last, "Page X of Y" and a page size selector.
///
/// Buttons are disabled from [`PageInfo`], so with no results both
/// directions are off and the label reads "Page 1 of 1".
#[component]
pub fn PaginationControls(
    #[prop(into)]
    info: Signal<PageInfo>,

    on_page_change: Callback<PageMove>,

    on_page_size_change: Callback<usize>,

    page_size_options: &'static [usize],
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(PageMove::First)
                disabled=move || !info.get().can_prev
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(PageMove::Prev)
                disabled=move || !info.get().can_prev
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || info.get().label()}
                <span class="pagination-info__range">{move || format!(" ({})", info.get().range_label())}</span>
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(PageMove::Next)
                disabled=move || !info.get().can_next
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(PageMove::Last)
                disabled=move || !info.get().can_next
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || info.get().page_size.to_string()
            >
                {page_size_options
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || info.get().page_size == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
