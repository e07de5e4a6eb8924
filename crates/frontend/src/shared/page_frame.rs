//! PageFrame - standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  - `"{module}--{category}"`, e.g. `"a003_order--list"`
//!   - `data-page-category`  - one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper; adds the BEM modifier class for the category.
#[component]
pub fn PageFrame(
    /// HTML id in format `{module}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Page title shown in the header.
    title: &'static str,
    /// Buttons rendered on the right side of the header.
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id '{}' does not follow module--category", page_id);
    }
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                <div class="page__actions">{actions.map(|a| a.run())}</div>
            </div>
            <div class="page__content">{children()}</div>
        </div>
    }
}
