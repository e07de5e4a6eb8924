mod state;

pub use state::{create_state, metric_cards, stock_badge, INVENTORY_LIST};

use crate::domain::a001_store::api::spawn_load_stores;
use crate::domain::a004_inventory::api;
use crate::shared::components::table::{format_money, SortableHeaderCell};
use crate::shared::components::{
    CardTone, CheckList, ErrorBar, FilterPanel, MessageRow, PaginationControls, SearchInput,
    StatCard, StoreMultiSelect,
};
use crate::shared::config::app_config;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_view::ListControls;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::sequence::{spawn_sequenced, RequestSequencer};
use contracts::domain::a001_store::Store;
use contracts::domain::a004_inventory::{InventoryMetrics, InventoryRow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::*;
use thaw::*;

const COLUMNS: usize = 7;

#[component]
fn QuantityInput(label: &'static str, #[prop(into)] value: Signal<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <label class="form__field form__field--narrow">
            <span class="form__label">{label}</span>
            <input
                type="number"
                class="form__input"
                prop:value=value
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let state = create_state();
    let controls = ListControls::new(state, &INVENTORY_LIST);
    let low_threshold = app_config().low_stock_threshold;

    let items = RwSignal::new(Vec::<InventoryRow>::new());
    let metrics = RwSignal::new(None::<InventoryMetrics>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let stores = RwSignal::new(Vec::<Store>::new());
    let product_types = RwSignal::new(Vec::<String>::new());
    let filters_expanded = RwSignal::new(true);
    let sequencer = StoredValue::new(RequestSequencer::new());

    spawn_load_stores(stores, error);
    spawn_local(async move {
        match api::fetch_product_types().await {
            Ok(types) => product_types.set(types),
            Err(e) => log::warn!("product types unavailable: {}", e),
        }
    });

    let load = move |query: String| {
        spawn_sequenced(
            &sequencer.get_value(),
            loading,
            async move { api::fetch_inventory(&query).await },
            move |result| match result {
                Ok(report) => {
                    controls.set_total_count(report.total_count);
                    items.set(report.items);
                    metrics.set(Some(report.metrics));
                    error.set(None);
                }
                Err(e) => {
                    items.set(Vec::new());
                    metrics.set(None);
                    error.set(Some(e.to_string()));
                }
            },
        );
    };

    let backend_query = controls.backend_query();
    Effect::new(move |_| load(backend_query.get()));

    let export = move |_| {
        let rows = items.get_untracked();
        if let Err(e) = export_to_csv(&rows, "inventory.csv") {
            error.set(Some(e));
        }
    };

    let card_value = move |index: usize| {
        Signal::derive(move || {
            metrics.with(|m| m.as_ref().and_then(|m| metric_cards(m).into_iter().nth(index)).map(|c| c.1))
        })
    };
    let card_tone = move |index: usize| {
        Signal::derive(move || {
            metrics
                .with(|m| m.as_ref().and_then(|m| metric_cards(m).into_iter().nth(index)).map(|c| c.2))
                .unwrap_or(CardTone::Neutral)
        })
    };

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
            page_id="a004_inventory--list"
            category=PAGE_CAT_LIST
            title="Inventory"
            actions=move || view! {
                <Button on_click=export disabled=Signal::derive(move || items.with(|i| i.is_empty()))>
                    {icon("download")}
                    " Export CSV"
                </Button>
                <Button on_click=move |_| load(backend_query.get_untracked()) loading=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            }
        >
            <div class="stat-cards">
                <StatCard label="SKUs" icon_name="inventory" value=card_value(0) />
                <StatCard label="Units on hand" icon_name="inventory" value=card_value(1) />
                <StatCard label="Stock value" icon_name="revenue" value=card_value(2) />
                <StatCard label="Low stock" icon_name="warning" value=card_value(3) tone=card_tone(3) />
                <StatCard label="Out of stock" icon_name="warning" value=card_value(4) tone=card_tone(4) />
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
                        page_size_options=INVENTORY_LIST.page_size_options
                    />
                }
            >
                <div class="filter-panel__row">
                    <SearchInput
                        value=controls.input_value(FILTER_SEARCH)
                        on_change=controls.on_filter(FILTER_SEARCH)
                        placeholder="Product, variant or SKU"
                    />
                    <QuantityInput label="Min qty" value=controls.input_value(FILTER_MIN_QTY) on_change=controls.on_filter(FILTER_MIN_QTY) />
                    <QuantityInput label="Max qty" value=controls.input_value(FILTER_MAX_QTY) on_change=controls.on_filter(FILTER_MAX_QTY) />
                </div>
                <StoreMultiSelect
                    stores=stores
                    selected=controls.list_value(FILTER_STORES)
                    on_change=controls.on_multi_filter(FILTER_STORES)
                />
                <div class="filter-panel__group">
                    <span class="form__label">"Product types"</span>
                    <CheckList
                        options=Signal::derive(move || product_types.with(|t| type_options(t)))
                        selected=controls.list_value(FILTER_TYPES)
                        on_change=controls.on_multi_filter(FILTER_TYPES)
                        empty_text="No product types"
                    />
                </div>
            </FilterPanel>

            <ErrorBar error=error />

            <div class=move || if loading.get() { "table-wrapper table-wrapper--loading" } else { "table-wrapper" }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            {header("Product", "product_title", "left")}
                            {header("SKU", "sku", "left")}
                            {header("Type", "product_type", "left")}
                            {header("Store", "store_name", "left")}
                            {header("Available", "available", "right")}
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            {header("Price", "price", "right")}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if let Some(message) = error.get() {
                                return view! { <MessageRow message=message colspan=COLUMNS is_error=true /> }.into_any();
                            }
                            let rows = items.get();
                            if rows.is_empty() {
                                let message = if loading.get() { "Loading..." } else { "No inventory found." };
                                return view! { <MessageRow message=message colspan=COLUMNS /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|row| {
                                    let (badge_class, badge_text) = stock_badge(row.stock_level(low_threshold));
                                    let title = match row.variant_title.as_deref() {
                                        Some(v) if !v.is_empty() && v != "Default Title" => format!("{} / {}", row.product_title, v),
                                        _ => row.product_title.clone(),
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {title}
                                                    <div class="table__cell-secondary">{row.location_name.clone().unwrap_or_default()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{row.sku.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.product_type.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.store_name.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <TableCell class="table__cell--number">{row.available}</TableCell>
                                            <TableCell><span class=badge_class>{badge_text}</span></TableCell>
                                            <TableCell class="table__cell--number">
                                                {row.price.map(|p| format_money(p, "")).unwrap_or_default()}
                                            </TableCell>
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
