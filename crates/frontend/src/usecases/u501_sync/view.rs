use super::api;
use crate::domain::a001_store::api::spawn_load_stores;
use crate::shared::components::{ErrorBar, MessageRow, NoticeBar, StoreMultiSelect};
use crate::shared::config::app_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::poller::{PollStep, Poller};
use contracts::domain::a001_store::Store;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_sync::{
    StoreSync, SyncKind, SyncStartRequest, SyncStatusResponse, SyncTask, SyncTaskStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const COLUMNS: usize = 6;

/// Ids of the checked stores; unparsable entries are skipped.
pub fn parse_store_ids(selected: &[String]) -> Vec<i64> {
    selected.iter().filter_map(|s| s.trim().parse().ok()).collect()
}

pub fn start_request(selected: &[String], full_resync: bool) -> SyncStartRequest {
    SyncStartRequest {
        store_ids: parse_store_ids(selected),
        full_resync,
    }
}

pub fn task_badge_class(status: SyncTaskStatus) -> &'static str {
    match status {
        SyncTaskStatus::Pending => "badge",
        SyncTaskStatus::Running => "badge badge--info",
        SyncTaskStatus::Completed => "badge badge--success",
        SyncTaskStatus::Failed => "badge badge--error",
        SyncTaskStatus::Cancelled => "badge badge--warning",
    }
}

/// "processed / total (pct%)", or just the processed count while the total is unknown.
pub fn progress_label(task: &SyncTask) -> String {
    match (task.total, task.percent()) {
        (Some(total), Some(pct)) => format!("{} / {} ({}%)", task.processed, total, pct),
        _ => task.processed.to_string(),
    }
}

pub fn status_summary(status: &SyncStatusResponse) -> String {
    if status.tasks.is_empty() {
        return "No sync tasks yet.".to_string();
    }
    match status.running_count() {
        0 => "All tasks finished.".to_string(),
        1 => "1 task running.".to_string(),
        n => format!("{} tasks running.", n),
    }
}

#[component]
pub fn SyncControl() -> impl IntoView {
    let stores = RwSignal::new(Vec::<Store>::new());
    let selected = RwSignal::new(Vec::<String>::new());
    let full_resync = RwSignal::new(false);
    let status = RwSignal::new(None::<SyncStatusResponse>);
    let starting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let polling = RwSignal::new(false);

    let poller = Poller::new();
    let interval_ms = app_config().poll_interval_ms;

    spawn_load_stores(stores, error);

    // Один цикл опроса на страницу; новый запуск заменяет текущий
    let start_polling = {
        let poller = poller.clone();
        move || {
            polling.set(true);
            poller.spawn(interval_ms, api::fetch_sync_status, move |result| match result {
                Ok(response) => {
                    let done = response.all_terminal();
                    status.set(Some(response));
                    if done {
                        polling.set(false);
                        PollStep::Done
                    } else {
                        PollStep::Continue
                    }
                }
                Err(e) => {
                    log::warn!("sync status poll failed: {}", e);
                    error.set(Some(e.to_string()));
                    polling.set(false);
                    PollStep::Done
                }
            });
        }
    };

    // Показываем задачи, запущенные до открытия страницы
    start_polling();

    {
        let poller = poller.clone();
        on_cleanup(move || poller.stop());
    }

    let start_sync = {
        let start_polling = start_polling.clone();
        move |kind: SyncKind| {
            let request = start_request(&selected.get_untracked(), full_resync.get_untracked());
            let start_polling = start_polling.clone();
            starting.set(true);
            error.set(None);
            notice.set(None);
            spawn_local(async move {
                match api::start_sync(kind, &request).await {
                    Ok(response) => {
                        let text = if response.message.is_empty() {
                            format!("{} sync started.", kind.label())
                        } else {
                            response.message
                        };
                        notice.set(Some(text));
                        start_polling();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                starting.set(false);
            });
        }
    };

    let stop_polling = {
        let poller = poller.clone();
        move |_| {
            poller.stop();
            polling.set(false);
        }
    };

    view! {
        <PageFrame page_id="u501_sync--usecase" category=PAGE_CAT_USECASE title=StoreSync::display_name()>
            <p class="page__description">{StoreSync::description()}</p>
            <ErrorBar error=error />
            <NoticeBar notice=notice />

            <div class="toolbar">
                <StoreMultiSelect stores=stores selected=selected on_change=Callback::new(move |ids| selected.set(ids)) />
                <label class="form__field form__field--checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || full_resync.get()
                        on:change=move |ev| full_resync.set(event_target_checked(&ev))
                    />
                    "Full resync"
                </label>
            </div>

            <div class="toolbar">
                {SyncKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let start_sync = start_sync.clone();
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=starting
                                on_click=move |_| start_sync(kind)
                            >
                                {icon("sync")}
                                {format!(" Sync {}", kind.label().to_lowercase())}
                            </Button>
                        }
                    })
                    .collect_view()}
                <Show when=move || polling.get()>
                    <Button on_click=stop_polling.clone()>"Stop watching"</Button>
                </Show>
            </div>

            <div class="sync__summary">
                {move || status.with(|s| s.as_ref().map(status_summary).unwrap_or_else(|| "Loading...".to_string()))}
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Kind"</TableHeaderCell>
                        <TableHeaderCell>"Store"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Progress"</TableHeaderCell>
                        <TableHeaderCell>"Started"</TableHeaderCell>
                        <TableHeaderCell>"Message"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let tasks = status.with(|s| s.as_ref().map(|s| s.tasks.clone()).unwrap_or_default());
                        if tasks.is_empty() {
                            return view! { <MessageRow message="No sync tasks." colspan=COLUMNS /> }.into_any();
                        }
                        tasks
                            .into_iter()
                            .map(|task| {
                                let pct = task.percent().unwrap_or(0);
                                let progress = progress_label(&task);
                                let started = task.started_at.as_deref().map(format_datetime).unwrap_or_default();
                                let badge = task_badge_class(task.status);
                                let status_label = task.status.label();
                                let kind = task.kind;
                                let store_name = task.store_name.unwrap_or_default();
                                let message = task.message.unwrap_or_default();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{kind}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{store_name}</TableCellLayout></TableCell>
                                        <TableCell><span class=badge>{status_label}</span></TableCell>
                                        <TableCell>
                                            <div class="progress">
                                                <div class="progress__bar" style=format!("width: {}%", pct)></div>
                                            </div>
                                            <span class="progress__label">{progress}</span>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{started}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{message}</TableCellLayout></TableCell>
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

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: SyncTaskStatus, processed: i64, total: Option<i64>) -> SyncTask {
        SyncTask {
            id: "t".into(),
            kind: "orders".into(),
            store_id: Some(1),
            store_name: Some("Main Store".into()),
            status,
            processed,
            total,
            message: None,
            started_at: None,
            finished_at: None,
        }
    }

    #[test]
    fn test_start_request() {
        let selected = vec!["1".to_string(), "x".to_string(), " 7 ".to_string()];
        let request = start_request(&selected, true);
        assert_eq!(request.store_ids, vec![1, 7]);
        assert!(request.full_resync);
        assert!(start_request(&[], false).store_ids.is_empty());
    }

    #[test]
    fn test_progress_label() {
        assert_eq!(progress_label(&task(SyncTaskStatus::Running, 25, Some(100))), "25 / 100 (25%)");
        assert_eq!(progress_label(&task(SyncTaskStatus::Running, 40, None)), "40");
    }

    #[test]
    fn test_status_summary() {
        assert_eq!(status_summary(&SyncStatusResponse::default()), "No sync tasks yet.");
        let mut status = SyncStatusResponse {
            tasks: vec![
                task(SyncTaskStatus::Running, 1, None),
                task(SyncTaskStatus::Pending, 0, None),
            ],
        };
        assert_eq!(status_summary(&status), "2 tasks running.");
        status.tasks[0].status = SyncTaskStatus::Completed;
        assert_eq!(status_summary(&status), "1 task running.");
        status.tasks[1].status = SyncTaskStatus::Cancelled;
        assert_eq!(status_summary(&status), "All tasks finished.");
    }
}
