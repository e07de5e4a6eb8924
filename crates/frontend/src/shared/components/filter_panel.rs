use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter area; the header carries the active filter count,
/// a "Clear filters" action and the pagination controls.
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    on_clear: Callback<()>,

    /// Pagination controls (rendered in the header)
    #[prop(optional, into)]
    pagination_controls: Option<ViewFn>,

    /// Filter content (form fields)
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <Show when=move || { active_filters_count.get() > 0 }>
                    <button
                        class="filter-panel__clear"
                        on:click=move |_| on_clear.run(())
                    >
                        "Clear filters"
                    </button>
                </Show>
                <div class="filter-panel-header__center">
                    {pagination_controls.map(|p| p.run())}
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">{children()}</div>
            </Show>
        </div>
    }
}
