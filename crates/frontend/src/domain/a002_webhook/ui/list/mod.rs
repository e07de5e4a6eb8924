mod state;

pub use state::{default_store_id, next_topic, parse_store_id};

use crate::domain::a001_store::api::spawn_load_stores;
use crate::domain::a002_webhook::api;
use crate::shared::components::{ErrorBar, MessageRow, NoticeBar, StoreSelect};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use crate::shared::sequence::{spawn_sequenced, RequestSequencer};
use contracts::domain::a001_store::Store;
use contracts::domain::a002_webhook::aggregate::unregistered_topics;
use contracts::domain::a002_webhook::{Webhook, WebhookInput};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const COLUMNS: usize = 4;

#[component]
pub fn WebhookList() -> impl IntoView {
    let stores = RwSignal::new(Vec::<Store>::new());
    let store_id = RwSignal::new(None::<i64>);
    let webhooks = RwSignal::new(Vec::<Webhook>::new());
    let topic = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let working = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let sequencer = StoredValue::new(RequestSequencer::new());

    spawn_load_stores(stores, error);

    // Первый магазин выбирается, как только список загружен
    Effect::new(move |_| {
        if store_id.get_untracked().is_none() {
            if let Some(id) = stores.with(|s| default_store_id(s)) {
                store_id.set(Some(id));
            }
        }
    });

    let load = move |id: i64| {
        spawn_sequenced(&sequencer.get_value(), loading, api::fetch_webhooks(id), move |result| {
            match result {
                Ok(list) => {
                    topic.update(|t| *t = next_topic(&list, t));
                    webhooks.set(list);
                    error.set(None);
                }
                Err(e) => {
                    webhooks.set(Vec::new());
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        if let Some(id) = store_id.get() {
            load(id);
        }
    });

    let register = move |_| {
        let (Some(id), selected_topic) = (store_id.get_untracked(), topic.get_untracked()) else {
            error.set(Some("Select a store first.".to_string()));
            return;
        };
        if selected_topic.is_empty() {
            error.set(Some("All topics are already registered.".to_string()));
            return;
        }
        working.set(true);
        notice.set(None);
        spawn_local(async move {
            let input = WebhookInput { store_id: id, topic: selected_topic };
            match api::register_webhook(&input).await {
                Ok(hook) => {
                    notice.set(Some(format!("Registered {}.", hook.topic)));
                    load(id);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            working.set(false);
        });
    };

    let delete = move |hook: Webhook| {
        working.set(true);
        notice.set(None);
        spawn_local(async move {
            match api::delete_webhook(hook.id).await {
                Ok(msg) => {
                    notice.set(Some(msg.text_or("Webhook deleted.")));
                    load(hook.store_id);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            working.set(false);
        });
    };

    view! {
        <PageFrame page_id="a002_webhook--form" category=PAGE_CAT_FORM title="Webhooks">
            <ErrorBar error=error />
            <NoticeBar notice=notice />

            <div class="toolbar">
                <label class="form__field">
                    <span class="form__label">"Store"</span>
                    <StoreSelect
                        stores=stores
                        value=Signal::derive(move || store_id.get().map(|id| id.to_string()).unwrap_or_default())
                        on_change=Callback::new(move |v: String| store_id.set(parse_store_id(&v)))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Topic"</span>
                    <select
                        class="form__select"
                        prop:value=move || topic.get()
                        on:change=move |ev| topic.set(event_target_value(&ev))
                    >
                        {move || {
                            webhooks.with(|list| unregistered_topics(list))
                                .into_iter()
                                .map(|t| view! { <option value=t>{t}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=register
                    disabled=Signal::derive(move || working.get() || topic.with(|t| t.is_empty()))
                >
                    {icon("plus")}
                    " Register"
                </Button>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Topic"</TableHeaderCell>
                        <TableHeaderCell>"Address"</TableHeaderCell>
                        <TableHeaderCell>"Created"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() && webhooks.with(|w| w.is_empty()) {
                            return view! { <MessageRow message="Loading..." colspan=COLUMNS /> }.into_any();
                        }
                        let list = webhooks.get();
                        if list.is_empty() {
                            return view! { <MessageRow message="No webhooks registered." colspan=COLUMNS /> }.into_any();
                        }
                        list.into_iter()
                            .map(|hook| {
                                let created = hook.created_at.as_deref().map(format_datetime).unwrap_or_default();
                                let for_delete = hook.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{hook.topic.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{hook.address.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Button size=ButtonSize::Small disabled=working
                                                on_click=move |_| delete(for_delete.clone())>
                                                {icon("trash")}
                                            </Button>
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
