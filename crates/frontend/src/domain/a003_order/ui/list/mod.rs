mod state;

pub use state::{create_state, metric_cards, page_currency, status_badge_class, status_label, ORDER_LIST};

use crate::domain::a001_store::api::spawn_load_stores;
use crate::domain::a003_order::api;
use crate::shared::components::table::{format_money, SortableHeaderCell};
use crate::shared::components::{
    DateInput, ErrorBar, FilterPanel, MessageRow, PaginationControls, SearchInput, StatCard,
    StoreMultiSelect,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_view::ListControls;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::sequence::{spawn_sequenced, RequestSequencer};
use contracts::domain::a001_store::Store;
use contracts::domain::a003_order::{OrderMetrics, OrderRow, FINANCIAL_STATUSES, FULFILLMENT_STATUSES};
use leptos::prelude::*;
use state::*;
use thaw::*;

const COLUMNS: usize = 8;

#[component]
fn StatusSelect(
    label: &'static str,
    options: &'static [&'static str],
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <select class="form__select" prop:value=value on:change=move |ev| on_change.run(event_target_value(&ev))>
                <option value="">"Any"</option>
                {options
                    .iter()
                    .map(|s| view! { <option value=*s selected=move || value.get() == *s>{status_label(s)}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let controls = ListControls::new(state, &ORDER_LIST);

    let orders = RwSignal::new(Vec::<OrderRow>::new());
    let metrics = RwSignal::new(None::<OrderMetrics>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let stores = RwSignal::new(Vec::<Store>::new());
    let filters_expanded = RwSignal::new(true);
    let sequencer = StoredValue::new(RequestSequencer::new());

    spawn_load_stores(stores, error);

    let load = move |query: String| {
        log::debug!("orders: fetching {}", query);
        spawn_sequenced(
            &sequencer.get_value(),
            loading,
            async move { api::fetch_orders(&query).await },
            move |result| match result {
                Ok(report) => {
                    controls.set_total_count(report.total_count);
                    orders.set(report.orders);
                    metrics.set(Some(report.metrics));
                    error.set(None);
                }
                Err(e) => {
                    orders.set(Vec::new());
                    metrics.set(None);
                    error.set(Some(e.to_string()));
                }
            },
        );
    };

    // Любое изменение параметров запроса (сортировка, фильтры, страница) -> новый запрос
    let backend_query = controls.backend_query();
    Effect::new(move |_| load(backend_query.get()));

    let export = move |_| {
        let rows = orders.get_untracked();
        let page = state.with_untracked(|s| s.page);
        if let Err(e) = export_to_csv(&rows, &format!("orders_page_{}.csv", page)) {
            error.set(Some(e));
        }
    };

    let currency = Signal::derive(move || orders.with(|o| page_currency(o)));
    let card = move |index: usize| {
        Signal::derive(move || {
            metrics.with(|m| {
                m.as_ref()
                    .and_then(|m| metric_cards(m, &currency.get()).into_iter().nth(index))
                    .map(|(_, value)| value)
            })
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
            page_id="a003_order--list"
            category=PAGE_CAT_LIST
            title="Orders"
            actions=move || view! {
                <Button on_click=export disabled=Signal::derive(move || orders.with(|o| o.is_empty()))>
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
                <StatCard label="Orders" icon_name="orders" value=card(0) />
                <StatCard label="Revenue" icon_name="revenue" value=card(1) />
                <StatCard label="Average order" icon_name="analytics" value=card(2) />
                <StatCard label="Unfulfilled" icon_name="warning" value=card(3) />
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
                        page_size_options=ORDER_LIST.page_size_options
                    />
                }
            >
                <div class="filter-panel__row">
                    <SearchInput
                        value=controls.input_value(FILTER_SEARCH)
                        on_change=controls.on_filter(FILTER_SEARCH)
                        placeholder="Order number, customer or email"
                    />
                    <StatusSelect
                        label="Payment"
                        options=FINANCIAL_STATUSES
                        value=controls.input_value(FILTER_FINANCIAL)
                        on_change=controls.on_filter(FILTER_FINANCIAL)
                    />
                    <StatusSelect
                        label="Fulfillment"
                        options=FULFILLMENT_STATUSES
                        value=controls.input_value(FILTER_FULFILLMENT)
                        on_change=controls.on_filter(FILTER_FULFILLMENT)
                    />
                    <DateInput label="From" value=controls.input_value(FILTER_START) on_change=controls.on_filter(FILTER_START) />
                    <DateInput label="To" value=controls.input_value(FILTER_END) on_change=controls.on_filter(FILTER_END) />
                </div>
                <StoreMultiSelect
                    stores=stores
                    selected=controls.list_value(FILTER_STORES)
                    on_change=controls.on_multi_filter(FILTER_STORES)
                />
            </FilterPanel>

            <ErrorBar error=error />

            <div class=move || if loading.get() { "table-wrapper table-wrapper--loading" } else { "table-wrapper" }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            {header("Order", "order_number", "left")}
                            {header("Date", "created_at", "left")}
                            <TableHeaderCell>"Store"</TableHeaderCell>
                            {header("Customer", "customer_name", "left")}
                            {header("Payment", "financial_status", "left")}
                            {header("Fulfillment", "fulfillment_status", "left")}
                            <TableHeaderCell>"Items"</TableHeaderCell>
                            {header("Total", "total_price", "right")}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if let Some(message) = error.get() {
                                return view! { <MessageRow message=message colspan=COLUMNS is_error=true /> }.into_any();
                            }
                            let rows = orders.get();
                            if rows.is_empty() {
                                let message = if loading.get() { "Loading..." } else { "No orders found." };
                                return view! { <MessageRow message=message colspan=COLUMNS /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|order| {
                                    let financial = order.financial_status.clone().unwrap_or_default();
                                    let fulfillment = order.fulfillment_status.clone().unwrap_or_else(|| "unfulfilled".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{order.order_number.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_datetime(&order.created_at)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{order.store_name.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {order.customer_name.clone().unwrap_or_else(|| "—".to_string())}
                                                    <div class="table__cell-secondary">{order.customer_email.clone().unwrap_or_default()}</div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class=status_badge_class(order.financial_status.as_deref())>{status_label(&financial)}</span>
                                            </TableCell>
                                            <TableCell>
                                                <span class=status_badge_class(Some(fulfillment.as_str()))>{status_label(&fulfillment)}</span>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{order.line_item_count}</TableCellLayout></TableCell>
                                            <TableCell class="table__cell--number">
                                                {format_money(order.total_price, order.currency.as_deref().unwrap_or(""))}
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
