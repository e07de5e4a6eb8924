mod state;

pub use state::{analytics_query, create_state, SALES_ANALYTICS};

use crate::domain::a001_store::api::spawn_load_stores;
use crate::projections::p900_sales_analytics::api;
use crate::shared::components::table::{format_money, SortableHeaderCell};
use crate::shared::components::{
    BarChart, DateInput, ErrorBar, FilterPanel, MessageRow, PaginationControls, StatCard,
    StoreMultiSelect,
};
use crate::shared::date_utils::today_utc;
use crate::shared::icons::icon;
use crate::shared::list_view::ListControls;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::sequence::{spawn_sequenced, RequestSequencer};
use contracts::domain::a001_store::Store;
use contracts::projections::p900_sales_analytics::{Granularity, SalesAnalyticsResponse};
use leptos::prelude::*;
use state::*;
use thaw::*;

const COLUMNS: usize = 4;

fn money(v: f64) -> String {
    format_money(v, "")
}

#[component]
pub fn SalesAnalytics() -> impl IntoView {
    let state = create_state();
    let controls = ListControls::new(state, &SALES_ANALYTICS);
    let today = today_utc();

    let report = RwSignal::new(None::<SalesAnalyticsResponse>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let stores = RwSignal::new(Vec::<Store>::new());
    let filters_expanded = RwSignal::new(true);
    let sequencer = StoredValue::new(RequestSequencer::new());

    spawn_load_stores(stores, error);

    let load = move |query: String| {
        spawn_sequenced(
            &sequencer.get_value(),
            loading,
            async move { api::fetch_sales_analytics(&query).await },
            move |result| match result {
                Ok(data) => {
                    controls.set_total_count(data.top_products.len());
                    report.set(Some(data));
                    error.set(None);
                }
                Err(e) => {
                    controls.set_total_count(0);
                    report.set(None);
                    error.set(Some(e.to_string()));
                }
            },
        );
    };

    // Сортировка и страницы топа товаров не меняют запрос
    let query = Memo::new(move |_| state.with(|s| analytics_query(s, today)));
    Effect::new(move |_| load(query.get()));

    let range = Signal::derive(move || state.with(|s| date_range(s, today)));
    let start_value = Signal::derive(move || range.get().0.format("%Y-%m-%d").to_string());
    let end_value = Signal::derive(move || range.get().1.format("%Y-%m-%d").to_string());
    let granularity_value = Signal::derive(move || state.with(|s| granularity(s).as_str().to_string()));
    let on_granularity = controls.on_filter(FILTER_GRANULARITY);

    let card = move |index: usize| {
        Signal::derive(move || {
            report.with(|r| {
                r.as_ref()
                    .and_then(|r| summary_cards(&r.summary).into_iter().nth(index))
                    .map(|(_, value)| value)
            })
        })
    };
    let points = Signal::derive(move || report.with(|r| r.as_ref().map(|r| chart_points(&r.series)).unwrap_or_default()));

    let header = move |label: &'static str, field: &'static str, align: &'static str| {
        view! {
            <SortableHeaderCell
                label=label
                sort_field=field
                current_sort_field=controls.sort_field()
                sort_ascending=controls.sort_ascending()
                on_sort=controls.on_sort()
                align=align
            />
        }
    };

    view! {
        <PageFrame
            page_id="p900_sales_analytics--dashboard"
            category=PAGE_CAT_DASHBOARD
            title="Sales analytics"
            actions=move || view! {
                <Button on_click=move |_| load(query.get_untracked()) loading=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            }
        >
            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=controls.active_filter_count()
                on_clear=controls.on_clear_filters()
            >
                <div class="filter-panel__row">
                    <DateInput label="From" value=start_value on_change=controls.on_filter(FILTER_START) />
                    <DateInput label="To" value=end_value on_change=controls.on_filter(FILTER_END) />
                    <label class="form__field">
                        <span class="form__label">"Granularity"</span>
                        <select
                            class="form__select"
                            prop:value=granularity_value
                            on:change=move |ev| on_granularity.run(event_target_value(&ev))
                        >
                            {Granularity::ALL
                                .into_iter()
                                .map(|g| view! {
                                    <option value=g.as_str() selected=move || granularity_value.get() == g.as_str()>
                                        {g.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <StoreMultiSelect
                    stores=stores
                    selected=controls.list_value(FILTER_STORES)
                    on_change=controls.on_multi_filter(FILTER_STORES)
                />
            </FilterPanel>

            <ErrorBar error=error />

            <div class="stat-cards">
                <StatCard label="Net sales" icon_name="revenue" value=card(0) />
                <StatCard label="Gross sales" icon_name="revenue" value=card(1) />
                <StatCard label="Orders" icon_name="orders" value=card(2) />
                <StatCard label="Units sold" icon_name="inventory" value=card(3) />
                <StatCard label="Average order" icon_name="analytics" value=card(4) />
                <StatCard label="Refunds" icon_name="warning" value=card(5) />
            </div>

            <BarChart points=points format_value=money title="Net sales by period" />

            <div class="section__header">
                <h3 class="section__title">"Top products"</h3>
                <PaginationControls
                    info=controls.page_info()
                    on_page_change=controls.on_page()
                    on_page_size_change=controls.on_page_size()
                    page_size_options=SALES_ANALYTICS.page_size_options
                />
            </div>

            <div class=move || if loading.get() { "table-wrapper table-wrapper--loading" } else { "table-wrapper" }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            {header("Product", "title", "left")}
                            {header("Store", "store_name", "left")}
                            {header("Units", "units_sold", "right")}
                            {header("Net sales", "net_sales", "right")}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if let Some(message) = error.get() {
                                return view! { <MessageRow message=message colspan=COLUMNS is_error=true /> }.into_any();
                            }
                            let rows = report.with(|r| {
                                r.as_ref()
                                    .map(|r| state.with(|s| visible_products(&r.top_products, s)))
                                    .unwrap_or_default()
                            });
                            if rows.is_empty() {
                                let message = if loading.get() { "Loading..." } else { "No sales in this period." };
                                return view! { <MessageRow message=message colspan=COLUMNS /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|p| view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{p.title}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{p.store_name.unwrap_or_default()}</TableCellLayout></TableCell>
                                        <TableCell class="table__cell--number">{p.units_sold}</TableCell>
                                        <TableCell class="table__cell--number">{money(p.net_sales)}</TableCell>
                                    </TableRow>
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
