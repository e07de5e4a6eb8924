//! Периодический опрос статуса фоновой задачи backend.
//!
//! Опрос - явная задача с `start`/`stop`: новый `start` заменяет текущий
//! цикл, `stop` (в том числе из `on_cleanup` при уходе со страницы)
//! завершает его на ближайшей итерации.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const IDLE: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollToken(u64);

/// What the poll handler wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    Continue,
    Done,
}

#[derive(Debug, Clone, Default)]
pub struct Poller {
    generation: Arc<AtomicU64>,
    running: Arc<AtomicU64>,
}

impl Poller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new poll, superseding any running one.
    pub fn start(&self) -> PollToken {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.running.store(token, Ordering::SeqCst);
        PollToken(token)
    }

    pub fn stop(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.running.store(IDLE, Ordering::SeqCst);
    }

    /// Marks `token` finished; a newer poll is left untouched.
    pub fn finish(&self, token: PollToken) {
        let _ = self
            .running
            .compare_exchange(token.0, IDLE, Ordering::SeqCst, Ordering::SeqCst);
    }

    pub fn is_running(&self, token: PollToken) -> bool {
        self.running.load(Ordering::SeqCst) == token.0
    }

    pub fn is_active(&self) -> bool {
        self.running.load(Ordering::SeqCst) != IDLE
    }

    /// Starts a poll loop: `fetch` every `interval_ms` until `handle` returns
    /// [`PollStep::Done`] or the poll is stopped/replaced. The first fetch
    /// happens immediately.
    pub fn spawn<F, Fut, T, H>(&self, interval_ms: u32, mut fetch: F, mut handle: H) -> PollToken
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = T> + 'static,
        H: FnMut(T) -> PollStep + 'static,
        T: 'static,
    {
        let token = self.start();
        let poller = self.clone();
        log::debug!("poll {:?} started, interval {} ms", token, interval_ms);
        spawn_local(async move {
            while poller.is_running(token) {
                let result = fetch().await;
                if !poller.is_running(token) {
                    break;
                }
                if handle(result) == PollStep::Done {
                    poller.finish(token);
                    break;
                }
                TimeoutFuture::new(interval_ms).await;
            }
            log::debug!("poll {:?} ended", token);
        });
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_replaces_running_poll() {
        let poller = Poller::new();
        let first = poller.start();
        assert!(poller.is_running(first));

        let second = poller.start();
        assert!(!poller.is_running(first));
        assert!(poller.is_running(second));
        assert!(poller.is_active());
    }

    #[test]
    fn test_stop() {
        let poller = Poller::new();
        let token = poller.start();
        poller.stop();
        assert!(!poller.is_running(token));
        assert!(!poller.is_active());
    }

    #[test]
    fn test_finish_only_affects_own_token() {
        let poller = Poller::new();
        let old = poller.start();
        let new = poller.start();
        poller.finish(old);
        assert!(poller.is_running(new));
        poller.finish(new);
        assert!(!poller.is_active());
    }
}
