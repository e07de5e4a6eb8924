use leptos::prelude::*;
use thaw::*;

/// Inline error next to the content it concerns; renders nothing while `error` is `None`.
#[component]
pub fn ErrorBar(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <div class="message-bar__text">{message}</div>
                </MessageBar>
            }
        })
    }
}

/// Success/info notice with the same placement rules as [`ErrorBar`].
#[component]
pub fn NoticeBar(#[prop(into)] notice: Signal<Option<String>>) -> impl IntoView {
    move || {
        notice.get().map(|message| {
            view! {
                <MessageBar intent=MessageBarIntent::Success>
                    <div class="message-bar__text">{message}</div>
                </MessageBar>
            }
        })
    }
}

/// Full-width table row carrying a message ("No orders found.", an error text...).
#[component]
pub fn MessageRow(
    #[prop(into)]
    message: String,
    colspan: usize,
    #[prop(optional)]
    is_error: bool,
) -> impl IntoView {
    let class = if is_error {
        "table__message table__message--error"
    } else {
        "table__message"
    };
    view! {
        <tr class="table__row">
            <td class=class colspan=colspan.to_string()>{message}</td>
        </tr>
    }
}
