//! TopHeader component - application top navigation bar.

use crate::layout::global_context::use_global_context;
use crate::layout::left::sidebar::label_for_path;
use crate::shared::config::app_config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();

    let is_sidebar_visible = move || ctx.left_open.get();
    let section = move || location.pathname.with(|p| label_for_path(p).unwrap_or(""));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Back office"</span>
                <span class="top-header__section">{section}</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__api" title="API base">{app_config().api_base.clone()}</span>
            </div>
        </div>
    }
}
