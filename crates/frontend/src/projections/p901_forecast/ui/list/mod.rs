mod state;

pub use state::{create_state, filtered_sorted, forecast_query, FORECAST_LIST};

use crate::domain::a001_store::api::spawn_load_stores;
use crate::projections::p901_forecast::api;
use crate::shared::components::table::{format_days, format_number_with_decimals, SortableHeaderCell};
use crate::shared::components::{
    BarChart, ErrorBar, FilterPanel, MessageRow, PaginationControls, SearchInput, StatCard,
    StoreMultiSelect,
};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_view::ListControls;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::sequence::{spawn_sequenced, RequestSequencer};
use contracts::domain::a001_store::Store;
use contracts::projections::p901_forecast::{ForecastItem, ForecastStatus};
use leptos::prelude::*;
use state::*;
use thaw::*;

const COLUMNS: usize = 8;

fn days_label(v: f64) -> String {
    format!("{} days", format_number_with_decimals(v, 1))
}

#[component]
pub fn ForecastList() -> impl IntoView {
    let state = create_state();
    let controls = ListControls::new(state, &FORECAST_LIST);

    let items = RwSignal::new(Vec::<ForecastItem>::new());
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
            async move { api::fetch_forecast(&query).await },
            move |result| match result {
                Ok(data) => {
                    log::debug!("forecast: {} items", data.len());
                    items.set(data);
                    error.set(None);
                }
                Err(e) => {
                    items.set(Vec::new());
                    error.set(Some(e.to_string()));
                }
            },
        );
    };

    // Запрос зависит только от магазинов и окна; остальное считаем локально
    let query = Memo::new(move |_| state.with(forecast_query));
    Effect::new(move |_| load(query.get()));

    let filtered = Memo::new(move |_| items.with(|all| state.with(|s| filtered_sorted(all, s))));
    Effect::new(move |_| controls.set_total_count(filtered.with(|f| f.len())));
    let page = Memo::new(move |_| filtered.with(|f| state.with(|s| current_page(f, s))));
    let chart = Signal::derive(move || page.with(|p| days_chart_points(p)));

    let export = move |_| {
        let rows = filtered.get_untracked();
        if let Err(e) = export_to_csv(&rows, "inventory_forecast.csv") {
            error.set(Some(e));
        }
    };

    let count_of = move |status: ForecastStatus| {
        Signal::derive(move || {
            if items.with(|i| i.is_empty()) {
                return None;
            }
            items.with(|all| {
                status_counts(all)
                    .into_iter()
                    .find(|(s, _)| *s == status)
                    .map(|(_, n)| n.to_string())
            })
        })
    };

    let lookback_value = Signal::derive(move || state.with(|s| lookback_days(s).to_string()));
    let on_lookback = controls.on_filter(FILTER_LOOKBACK);
    let status_value = controls.input_value(FILTER_STATUS);
    let on_status = controls.on_filter(FILTER_STATUS);

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
            page_id="p901_forecast--list"
            category=PAGE_CAT_LIST
            title="Inventory forecast"
            actions=move || view! {
                <Button on_click=export disabled=Signal::derive(move || filtered.with(|f| f.is_empty()))>
                    {icon("download")}
                    " Export CSV"
                </Button>
                <Button on_click=move |_| load(query.get_untracked()) loading=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            }
        >
            <div class="stat-cards">
                <StatCard label="Critical" icon_name="warning" value=count_of(ForecastStatus::Critical) />
                <StatCard label="Low" icon_name="warning" value=count_of(ForecastStatus::Low) />
                <StatCard label="OK" icon_name="inventory" value=count_of(ForecastStatus::Ok) />
                <StatCard label="Overstock" icon_name="inventory" value=count_of(ForecastStatus::Overstock) />
                <StatCard label="No sales" icon_name="forecast" value=count_of(ForecastStatus::NoSales) />
            </div>

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=controls.active_filter_count()
                on_clear=controls.on_clear_filters()
                pagination_controls=move || view! {
                    <PaginationControls
                        info=controls.page_info()
                        on_page_change=controls.on_page()
                        on_page_size_change=controls.on_page_size()
                        page_size_options=FORECAST_LIST.page_size_options
                    />
                }
            >
                <div class="filter-panel__row">
                    <SearchInput
                        value=controls.input_value(FILTER_SEARCH)
                        on_change=controls.on_filter(FILTER_SEARCH)
                        placeholder="Product, SKU or store"
                    />
                    <label class="form__field">
                        <span class="form__label">"Status"</span>
                        <select class="form__select" prop:value=status_value on:change=move |ev| on_status.run(event_target_value(&ev))>
                            <option value="">"Any"</option>
                            {ForecastStatus::FILTERABLE
                                .into_iter()
                                .map(|s| view! {
                                    <option value=s.as_str() selected=move || status_value.get() == s.as_str()>{s.label()}</option>
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form__field">
                        <span class="form__label">"Sales window"</span>
                        <select class="form__select" prop:value=lookback_value on:change=move |ev| on_lookback.run(event_target_value(&ev))>
                            {LOOKBACK_OPTIONS
                                .iter()
                                .map(|d| {
                                    let value = d.to_string();
                                    let selected_value = value.clone();
                                    view! {
                                        <option value=value selected=move || lookback_value.get() == selected_value>
                                            {format!("{} days", d)}
                                        </option>
                                    }
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

            <BarChart points=chart format_value=days_label title="Days of stock (current page)" />

            <div class=move || if loading.get() { "table-wrapper table-wrapper--loading" } else { "table-wrapper" }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            {header("Product", "product_title", "left")}
                            {header("SKU", "sku", "left")}
                            {header("Store", "store_name", "left")}
                            {header("Stock", "current_stock", "right")}
                            {header("Avg / day", "avg_daily_sales", "right")}
                            {header("Days left", "days_of_stock", "right")}
                            {header("Reorder", "reorder_quantity", "right")}
                            {header("Status", "status", "left")}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if let Some(message) = error.get() {
                                return view! { <MessageRow message=message colspan=COLUMNS is_error=true /> }.into_any();
                            }
                            let rows = page.get();
                            if rows.is_empty() {
                                let message = if loading.get() { "Loading..." } else { "No forecast items found." };
                                return view! { <MessageRow message=message colspan=COLUMNS /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|item| {
                                    let title = display_title(&item);
                                    let sku = item.sku.unwrap_or_default();
                                    let store_name = item.store_name.unwrap_or_default();
                                    let current_stock = item.current_stock;
                                    let avg_daily = format_number_with_decimals(item.avg_daily_sales, 2);
                                    let days_left = format_days(item.days_of_stock);
                                    let reorder = item.reorder_quantity;
                                    let badge = status_badge_class(item.status);
                                    let status = item.status.label();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{title}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{sku}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{store_name}</TableCellLayout></TableCell>
                                            <TableCell class="table__cell--number">{current_stock}</TableCell>
                                            <TableCell class="table__cell--number">{avg_daily}</TableCell>
                                            <TableCell class="table__cell--number">{days_left}</TableCell>
                                            <TableCell class="table__cell--number">{reorder}</TableCell>
                                            <TableCell><span class=badge>{status}</span></TableCell>
                                        </TableRow>
                                    }
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
