use super::api;
use super::model::*;
use crate::domain::a001_store::api::spawn_load_stores;
use crate::shared::components::table::{format_number_int, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::{ErrorBar, MessageRow, NoticeBar, SearchInput, StoreSelect};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::sequence::{spawn_sequenced, RequestSequencer};
use contracts::domain::a001_store::Store;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_bulk_update::{BulkUpdateRequest, BulkVariantUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const COLUMNS: usize = 7;

/// Which text field of a row an input edits.
#[derive(Clone, Copy)]
enum Field {
    Price,
    CompareAt,
    Sku,
}

fn field_value(row: &EditableVariant, field: Field) -> String {
    match field {
        Field::Price => row.price.clone(),
        Field::CompareAt => row.compare_at_price.clone(),
        Field::Sku => row.sku.clone(),
    }
}

#[component]
pub fn BulkUpdate() -> impl IntoView {
    let stores = RwSignal::new(Vec::<Store>::new());
    let store_id = RwSignal::new(None::<i64>);
    let rows = RwSignal::new(Vec::<EditableVariant>::new());
    let search = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let loaded = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let sequencer = StoredValue::new(RequestSequencer::new());

    spawn_load_stores(stores, error);

    Effect::new(move |_| {
        if store_id.get_untracked().is_none() {
            if let Some(first) = stores.with(|s| s.first().map(|s| s.id)) {
                store_id.set(Some(first));
            }
        }
    });

    let load = move |id: i64| {
        loaded.set(false);
        spawn_sequenced(&sequencer.get_value(), loading, api::fetch_variants(id), move |result| {
            match result {
                Ok(list) => {
                    log::debug!("bulk update: {} variants for store {}", list.len(), id);
                    rows.set(load_rows(list));
                    error.set(None);
                }
                Err(e) => {
                    rows.set(Vec::new());
                    error.set(Some(e.to_string()));
                }
            }
            loaded.set(true);
        });
    };

    Effect::new(move |_| {
        if let Some(id) = store_id.get() {
            notice.set(None);
            load(id);
        }
    });

    let visible = Memo::new(move |_| search.with(|q| rows.with(|r| visible_indices(r, q))));
    let selected_count = Signal::derive(move || visible.with(|v| rows.with(|r| checked_count(r, v))));
    let visible_count = Signal::derive(move || visible.with(|v| v.len()));

    let edit = move |idx: usize, field: Field, value: String| {
        rows.update(|r| {
            if let Some(row) = r.get_mut(idx) {
                match field {
                    Field::Price => row.price = value,
                    Field::CompareAt => row.compare_at_price = value,
                    Field::Sku => row.sku = value,
                }
                row.error = None;
                if row.is_dirty() {
                    row.checked = true;
                }
            }
        });
    };

    let save = move |_| {
        let Some(id) = store_id.get_untracked() else {
            error.set(Some("Select a store first.".to_string()));
            return;
        };
        let updates = match rows.with_untracked(|r| build_updates(r)) {
            Ok(updates) => updates,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        notice.set(None);
        saving.set(true);
        spawn_local(async move {
            let request = BulkUpdateRequest { store_id: id, updates };
            match api::save_variants(&request).await {
                Ok(response) => {
                    rows.update(|r| apply_save_result(r, &request.updates, &response));
                    if response.failed.is_empty() {
                        notice.set(Some(save_summary(&response)));
                    } else {
                        error.set(Some(save_summary(&response)));
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    let cell_input = move |idx: usize, field: Field, class: &'static str| {
        view! {
            <input
                class=class
                prop:value=move || rows.with(|r| r.get(idx).map(|row| field_value(row, field)).unwrap_or_default())
                on:input=move |ev| edit(idx, field, event_target_value(&ev))
            />
        }
    };

    view! {
        <PageFrame page_id="u502_bulk_update--usecase" category=PAGE_CAT_USECASE title=BulkVariantUpdate::display_name()>
            <p class="page__description">{BulkVariantUpdate::description()}</p>
            <ErrorBar error=error />
            <NoticeBar notice=notice />

            <div class="toolbar">
                <label class="form__field">
                    <span class="form__label">"Store"</span>
                    <StoreSelect
                        stores=stores
                        value=Signal::derive(move || store_id.get().map(|id| id.to_string()).unwrap_or_default())
                        on_change=Callback::new(move |v: String| store_id.set(v.trim().parse().ok()))
                    />
                </label>
                <SearchInput
                    value=search
                    on_change=Callback::new(move |q: String| search.set(q))
                    placeholder="Product, SKU or type"
                />
                <span class="toolbar__info">
                    {move || format!("{} selected", selected_count.get())}
                </span>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    loading=saving
                    disabled=Signal::derive(move || saving.get() || loading.get())
                >
                    "Save"
                </Button>
            </div>

            <div class=move || if loading.get() { "table-wrapper table-wrapper--loading" } else { "table-wrapper" }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                selected_count=selected_count
                                total_count=visible_count
                                on_change=Callback::new(move |checked: bool| {
                                    let indices = visible.get_untracked();
                                    rows.update(|r| set_checked(r, &indices, checked));
                                })
                            />
                            <TableHeaderCell>"Product"</TableHeaderCell>
                            <TableHeaderCell>"SKU"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Compare at"</TableHeaderCell>
                            <TableHeaderCell>"Stock"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show
                            when=move || !visible.with(|v| v.is_empty())
                            fallback=move || {
                                let message = empty_message(
                                    loading.get(),
                                    loaded.get(),
                                    store_id.with(|id| id.is_some()),
                                    rows.with(|r| r.len()),
                                );
                                view! { <MessageRow message=message colspan=COLUMNS /> }
                            }
                        >
                            <For
                                each=move || {
                                    visible.with(|v| rows.with(|r| {
                                        v.iter()
                                            .filter_map(|&i| r.get(i).map(|row| (i, row.original.variant_id)))
                                            .collect::<Vec<_>>()
                                    }))
                                }
                                key=|pair| *pair
                                children=move |(idx, _)| {
                                    let row = move || rows.with(|r| r.get(idx).cloned());
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                checked=Signal::derive(move || rows.with(|r| r.get(idx).is_some_and(|row| row.checked)))
                                                on_change=Callback::new(move |checked: bool| {
                                                    rows.update(|r| set_checked(r, &[idx], checked));
                                                })
                                            />
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || row().map(|r| r.original.display_title()).unwrap_or_default()}
                                                    <div class="table__cell-secondary">
                                                        {move || row().and_then(|r| r.original.product_type).unwrap_or_default()}
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{cell_input(idx, Field::Sku, "form__input form__input--sku")}</TableCell>
                                            <TableCell>{cell_input(idx, Field::Price, "form__input form__input--price")}</TableCell>
                                            <TableCell>{cell_input(idx, Field::CompareAt, "form__input form__input--price")}</TableCell>
                                            <TableCell class="table__cell--number">
                                                {move || row().map(|r| format_number_int(r.original.inventory_quantity as f64)).unwrap_or_default()}
                                            </TableCell>
                                            <TableCell>
                                                {move || row().and_then(|r| r.error).map(|e| {
                                                    let title = e.clone();
                                                    view! {
                                                        <span class="table__cell-error" title=title>{icon("warning")}" "{e}</span>
                                                    }
                                                })}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </Show>
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
