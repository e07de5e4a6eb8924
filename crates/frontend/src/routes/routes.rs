use crate::domain::a001_store::ui::list::StoreList;
use crate::domain::a002_webhook::ui::list::WebhookList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_inventory::ui::list::InventoryList;
use crate::layout::left::sidebar::{nav_items, Sidebar};
use crate::layout::Shell;
use crate::projections::p900_sales_analytics::ui::list::SalesAnalytics;
use crate::projections::p901_forecast::ui::list::ForecastList;
use crate::shared::icons::icon;
use crate::usecases::u501_sync::SyncControl;
use crate::usecases::u502_bulk_update::BulkUpdate;
use crate::usecases::u503_product_mutation::ProductMutationConsole;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

/// Стартовая страница: плитки со всеми разделами меню
#[component]
fn Home() -> impl IntoView {
    view! {
        <div id="home--dashboard" class="page page--dashboard" data-page-category="dashboard">
            <div class="page__header">
                <h1 class="page__title">"Back office"</h1>
            </div>
            <div class="home__tiles">
                {nav_items()
                    .map(|nav| view! {
                        <A href=nav.path attr:class="home__tile">
                            {icon(nav.icon)}
                            <span>{nav.label}</span>
                        </A>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page not found"</h1>
            <A href="/">"Back to the start page"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! {
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/stores") view=StoreList />
                        <Route path=path!("/webhooks") view=WebhookList />
                        <Route path=path!("/sync") view=SyncControl />
                        <Route path=path!("/orders") view=OrderList />
                        <Route path=path!("/inventory") view=InventoryList />
                        <Route path=path!("/forecast") view=ForecastList />
                        <Route path=path!("/analytics") view=SalesAnalytics />
                        <Route path=path!("/bulk-update") view=BulkUpdate />
                        <Route path=path!("/mutations") view=ProductMutationConsole />
                    </Routes>
                }.into_any()
            />
        </Router>
    }
}
