//! Нумерация запросов, чтобы поздний ответ на старый запрос не затёр
//! уже отрисованные свежие данные.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    issued: Arc<AtomicU64>,
    rendered: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Numbers a new request; later calls always get larger tickets.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no newer request has been issued. The owner of the latest
    /// ticket is the one that clears the loading indicator.
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Claims the right to render. Fails when a newer response has already
    /// been rendered; the caller must then drop its result.
    pub fn commit(&self, ticket: RequestTicket) -> bool {
        let previous = self.rendered.fetch_max(ticket.0, Ordering::SeqCst);
        ticket.0 >= previous
    }
}

/// Runs `request` under a fresh ticket: `apply` sees the result only when
/// it is not stale, and `loading` is cleared by the newest request alone.
pub fn spawn_sequenced<T, Fut, A>(
    sequencer: &RequestSequencer,
    loading: RwSignal<bool>,
    request: Fut,
    apply: A,
) -> RequestTicket
where
    T: 'static,
    Fut: Future<Output = T> + 'static,
    A: FnOnce(T) + 'static,
{
    let sequencer = sequencer.clone();
    let ticket = sequencer.issue();
    loading.set(true);
    spawn_local(async move {
        let result = request.await;
        if sequencer.commit(ticket) {
            apply(result);
        } else {
            log::debug!("dropping stale response {:?}", ticket);
        }
        if sequencer.is_latest(ticket) {
            loading.set(false);
        }
    });
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert!(!seq.is_latest(a));
        assert!(seq.is_latest(b));
    }

    #[test]
    fn test_late_stale_response_is_dropped() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        let b = seq.issue();

        // B resolves first and renders, then A arrives.
        assert!(seq.commit(b));
        assert!(!seq.commit(a));
    }

    #[test]
    fn test_in_order_responses_both_render() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(seq.commit(a));
        assert!(seq.commit(b));
    }

    #[test]
    fn test_clones_share_counters() {
        let seq = RequestSequencer::new();
        let other = seq.clone();
        let a = seq.issue();
        let b = other.issue();
        assert!(other.commit(b));
        assert!(!seq.commit(a));
    }
}
