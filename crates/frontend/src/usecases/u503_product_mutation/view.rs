use super::api;
use super::model::*;
use crate::domain::a001_store::api::spawn_load_stores;
use crate::shared::components::{ErrorBar, StoreSelect};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a001_store::Store;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_product_mutation::{MutationResult, MutationTemplate, ProductMutation};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ProductMutationConsole() -> impl IntoView {
    let stores = RwSignal::new(Vec::<Store>::new());
    let store_id = RwSignal::new(None::<i64>);
    let templates = RwSignal::new(Vec::<MutationTemplate>::new());
    let template_name = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());
    let variables = RwSignal::new("{}".to_string());
    let result = RwSignal::new(None::<MutationResult>);
    let running = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    spawn_load_stores(stores, error);

    Effect::new(move |_| {
        if store_id.get_untracked().is_none() {
            if let Some(first) = stores.with(|s| s.first().map(|s| s.id)) {
                store_id.set(Some(first));
            }
        }
    });

    spawn_local(async move {
        match api::fetch_templates().await {
            Ok(list) => templates.set(list),
            Err(e) => error.set(Some(format!("Could not load templates: {}", e))),
        }
    });

    let pick_template = move |name: String| {
        let picked = templates.with_untracked(|t| t.iter().find(|t| t.name == name).cloned());
        if let Some(template) = picked {
            query.set(template.query.clone());
            variables.set(variables_text(&template.variables));
            result.set(None);
        }
        template_name.set(name);
    };

    let execute = move |_| {
        let request = match build_request(
            store_id.get_untracked(),
            &query.get_untracked(),
            &variables.get_untracked(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        result.set(None);
        running.set(true);
        spawn_local(async move {
            match api::execute_mutation(&request).await {
                Ok(response) => result.set(Some(response)),
                Err(e) => error.set(Some(e.to_string())),
            }
            running.set(false);
        });
    };

    let template_description = move || {
        template_name.with(|name| {
            templates.with(|t| t.iter().find(|t| &t.name == name).map(|t| t.description.clone()))
        })
    };

    view! {
        <PageFrame page_id="u503_product_mutation--usecase" category=PAGE_CAT_USECASE title=ProductMutation::display_name()>
            <p class="page__description">{ProductMutation::description()}</p>
            <ErrorBar error=error />

            <div class="toolbar">
                <label class="form__field">
                    <span class="form__label">"Store"</span>
                    <StoreSelect
                        stores=stores
                        value=Signal::derive(move || store_id.get().map(|id| id.to_string()).unwrap_or_default())
                        on_change=Callback::new(move |v: String| store_id.set(v.trim().parse().ok()))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Template"</span>
                    <select
                        class="form__select"
                        prop:value=move || template_name.get()
                        on:change=move |ev| pick_template(event_target_value(&ev))
                    >
                        <option value="">"Custom"</option>
                        {move || {
                            templates
                                .get()
                                .into_iter()
                                .map(|t| {
                                    let value = t.name.clone();
                                    view! { <option value=value>{t.name}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
            </div>
            {move || template_description().filter(|d| !d.is_empty()).map(|d| view! { <p class="form__hint">{d}</p> })}

            <div class="mutation-editor">
                <label class="form__field form__field--wide">
                    <span class="form__label">"Mutation"</span>
                    <textarea
                        class="form__textarea form__textarea--code"
                        rows="14"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__field form__field--wide">
                    <span class="form__label">"Variables (JSON)"</span>
                    <textarea
                        class="form__textarea form__textarea--code"
                        rows="14"
                        prop:value=move || variables.get()
                        on:input=move |ev| variables.set(event_target_value(&ev))
                    ></textarea>
                </label>
            </div>

            <div class="toolbar">
                <Button appearance=ButtonAppearance::Primary on_click=execute loading=running disabled=running>
                    {icon("mutations")}
                    " Execute"
                </Button>
            </div>

            {move || {
                result.get().map(|res| {
                    let intent = if res.is_success() { MessageBarIntent::Success } else { MessageBarIntent::Warning };
                    let headline = result_headline(&res);
                    let data = data_text(&res);
                    view! {
                        <div class="mutation-result">
                            <MessageBar intent=intent>
                                <div class="message-bar__text">{headline}</div>
                            </MessageBar>
                            {(!res.errors.is_empty()).then(|| view! {
                                <div class="mutation-result__section">
                                    <h4>"Errors"</h4>
                                    <ul>
                                        {res.errors.iter().map(|e| view! { <li>{e.message.clone()}</li> }).collect_view()}
                                    </ul>
                                </div>
                            })}
                            {(!res.user_errors.is_empty()).then(|| view! {
                                <div class="mutation-result__section">
                                    <h4>"User errors"</h4>
                                    <ul>
                                        {res.user_errors.iter().map(|e| view! { <li>{user_error_text(e)}</li> }).collect_view()}
                                    </ul>
                                </div>
                            })}
                            {data.map(|json| view! {
                                <div class="mutation-result__section">
                                    <h4>"Data"</h4>
                                    <pre class="code-block">{json}</pre>
                                </div>
                            })}
                        </div>
                    }
                })
            }}
        </PageFrame>
    }
}
