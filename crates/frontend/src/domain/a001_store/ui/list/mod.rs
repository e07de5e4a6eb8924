mod state;

pub use state::{upsert_store, StoreForm};

use crate::domain::a001_store::api;
use crate::shared::components::{ErrorBar, MessageRow, NoticeBar};
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::sequence::{spawn_sequenced, RequestSequencer};
use contracts::domain::a001_store::Store;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const COLUMNS: usize = 7;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn StoreList() -> impl IntoView {
    let stores = RwSignal::new(Vec::<Store>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let form = RwSignal::new(None::<StoreForm>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let busy_store = RwSignal::new(None::<i64>);
    let sequencer = StoredValue::new(RequestSequencer::new());

    let load = move || {
        spawn_sequenced(&sequencer.get_value(), loading, api::fetch_stores(), move |result| {
            match result {
                Ok(list) => {
                    stores.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };
    load();

    let save = move |_| {
        let Some(current) = form.get_untracked() else { return };
        let input = match current.to_input() {
            Ok(input) => input,
            Err(msg) => {
                form_error.set(Some(msg));
                return;
            }
        };
        form_error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = match current.editing_id {
                Some(id) => api::update_store(id, &input).await,
                None => api::create_store(&input).await,
            };
            match result {
                Ok(saved) => {
                    notice.set(Some(format!("Store '{}' saved.", saved.name)));
                    stores.update(|list| upsert_store(list, saved));
                    form.set(None);
                }
                Err(e) => form_error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    let delete = move |store: Store| {
        if !confirm(&format!("Delete store '{}'? Synced data stays in the backend.", store.name)) {
            return;
        }
        busy_store.set(Some(store.id));
        spawn_local(async move {
            match api::delete_store(store.id).await {
                Ok(msg) => {
                    notice.set(Some(msg.text_or("Store deleted.")));
                    stores.update(|list| list.retain(|s| s.id != store.id));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy_store.set(None);
        });
    };

    let test_connection = move |store: Store| {
        busy_store.set(Some(store.id));
        notice.set(None);
        error.set(None);
        spawn_local(async move {
            match api::test_store_connection(store.id).await {
                Ok(msg) => notice.set(Some(format!("{}: {}", store.name, msg.text_or("Connection OK")))),
                Err(e) => error.set(Some(format!("{}: {}", store.name, e))),
            }
            busy_store.set(None);
        });
    };

    let edit_field = move |apply: fn(&mut StoreForm, String), value: String| {
        form.update(|f| {
            if let Some(f) = f.as_mut() {
                apply(f, value);
            }
        });
    };
    let field = move |get: fn(&StoreForm) -> String| form.with(|f| f.as_ref().map(get).unwrap_or_default());
    // Форма перерисовывается только при открытии/смене записи, не на каждый ввод
    let form_key = Memo::new(move |_| form.with(|f| f.as_ref().map(|f| f.editing_id)));

    view! {
        <PageFrame
            page_id="a001_store--form"
            category=PAGE_CAT_FORM
            title="Stores"
            actions=move || view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| {
                    form_error.set(None);
                    form.set(Some(StoreForm::blank()));
                }>
                    {icon("plus")}
                    " Add store"
                </Button>
                <Button on_click=move |_| load() loading=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            }
        >
            <ErrorBar error=error />
            <NoticeBar notice=notice />

            {move || form_key.get().map(|editing_id| {
                let is_new = editing_id.is_none();
                view! {
                    <div class="form-card">
                        <h2 class="form-card__title">
                            {move || form.with(|f| f.as_ref().map(StoreForm::title).unwrap_or_default())}
                        </h2>
                        <ErrorBar error=form_error />
                        <div class="form__grid">
                            <label class="form__field">
                                <span class="form__label">"Name"</span>
                                <input class="form__input" prop:value=move || field(|f| f.name.clone())
                                    on:input=move |ev| edit_field(|f, v| f.name = v, event_target_value(&ev)) />
                            </label>
                            <label class="form__field">
                                <span class="form__label">"Shop domain"</span>
                                <input class="form__input" placeholder="example.myshopify.com"
                                    prop:value=move || field(|f| f.shop_domain.clone())
                                    on:input=move |ev| edit_field(|f, v| f.shop_domain = v, event_target_value(&ev)) />
                            </label>
                            <label class="form__field">
                                <span class="form__label">
                                    {if is_new { "Access token" } else { "Access token (blank keeps current)" }}
                                </span>
                                <input class="form__input" type="password"
                                    prop:value=move || field(|f| f.access_token.clone())
                                    on:input=move |ev| edit_field(|f, v| f.access_token = v, event_target_value(&ev)) />
                            </label>
                            <label class="form__field">
                                <span class="form__label">"API version"</span>
                                <input class="form__input" placeholder="2024-01"
                                    prop:value=move || field(|f| f.api_version.clone())
                                    on:input=move |ev| edit_field(|f, v| f.api_version = v, event_target_value(&ev)) />
                            </label>
                            <label class="form__field">
                                <span class="form__label">"Currency"</span>
                                <input class="form__input" placeholder="USD"
                                    prop:value=move || field(|f| f.currency.clone())
                                    on:input=move |ev| edit_field(|f, v| f.currency = v, event_target_value(&ev)) />
                            </label>
                            <label class="form__field form__field--inline">
                                <input type="checkbox"
                                    prop:checked=move || form.with(|f| f.as_ref().map_or(true, |f| f.is_active))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        form.update(|f| {
                                            if let Some(f) = f.as_mut() {
                                                f.is_active = checked;
                                            }
                                        });
                                    } />
                                <span class="form__label">"Active"</span>
                            </label>
                        </div>
                        <div class="form__actions">
                            <Button appearance=ButtonAppearance::Primary on_click=save loading=saving>"Save"</Button>
                            <Button on_click=move |_| form.set(None) disabled=saving>"Cancel"</Button>
                        </div>
                    </div>
                }
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Domain"</TableHeaderCell>
                        <TableHeaderCell>"API version"</TableHeaderCell>
                        <TableHeaderCell>"Currency"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Created"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let list = stores.get();
                        if list.is_empty() {
                            let message = if loading.get() { "Loading..." } else { "No stores configured." };
                            return view! { <MessageRow message=message colspan=COLUMNS /> }.into_any();
                        }
                        list.into_iter()
                            .map(|store| {
                                let for_edit = store.clone();
                                let for_test = store.clone();
                                let for_delete = store.clone();
                                let id = store.id;
                                let row_busy = move || busy_store.get() == Some(id);
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{store.name.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{store.shop_domain.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{store.api_version.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{store.currency.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <span class=if store.is_active { "badge badge--success" } else { "badge" }>
                                                {if store.is_active { "Active" } else { "Inactive" }}
                                            </span>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{format_timestamp(store.created_at.as_ref())}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Space>
                                                <Button size=ButtonSize::Small on_click=move |_| {
                                                    form_error.set(None);
                                                    form.set(Some(StoreForm::from_store(&for_edit)));
                                                }>"Edit"</Button>
                                                <Button size=ButtonSize::Small disabled=Signal::derive(row_busy)
                                                    on_click=move |_| test_connection(for_test.clone())>
                                                    "Test"
                                                </Button>
                                                <Button size=ButtonSize::Small disabled=Signal::derive(row_busy)
                                                    on_click=move |_| delete(for_delete.clone())>
                                                    {icon("trash")}
                                                </Button>
                                            </Space>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </PageFrame>
    }
}
