use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// Debounce без таймер-хендлов: каждый `arm` делает предыдущие токены
/// недействительными, выстреливает только последний.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&self) -> DebounceToken {
        DebounceToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: DebounceToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Drops whatever is pending.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Waits `delay_ms` and reports whether no newer event arrived meanwhile.
    pub async fn settle(&self, delay_ms: u32) -> bool {
        self.settle_after(TimeoutFuture::new(delay_ms)).await
    }

    /// Same as [`Debouncer::settle`] with any pause future in place of the timer.
    pub async fn settle_after<F: Future<Output = ()>>(&self, pause: F) -> bool {
        let token = self.arm();
        pause.await;
        self.is_current(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_fires_once_with_last_value() {
        let debouncer = Debouncer::new();
        let pending = vec![
            (debouncer.arm(), "sh"),
            (debouncer.arm(), "shi"),
            (debouncer.arm(), "shirt"),
        ];

        // All timers elapse after the burst.
        let fired: Vec<&str> = pending
            .into_iter()
            .filter(|(token, _)| debouncer.is_current(*token))
            .map(|(_, value)| value)
            .collect();
        assert_eq!(fired, vec!["shirt"]);
    }

    #[test]
    fn test_separate_pauses_fire_each() {
        let debouncer = Debouncer::new();
        let first = debouncer.arm();
        assert!(debouncer.is_current(first));
        let second = debouncer.arm();
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn test_settle_burst_lets_only_last_through() {
        use futures::channel::oneshot;
        use futures::executor::block_on;
        use futures::future::{join_all, FutureExt};

        let debouncer = Debouncer::new();
        let mut releases = Vec::new();
        let mut settles = Vec::new();
        for value in ["sh", "shi", "shirt"] {
            let (tx, rx) = oneshot::channel::<()>();
            releases.push(tx);
            let d = debouncer.clone();
            settles.push(async move { d.settle_after(rx.map(|_| ())).await.then_some(value) });
        }

        // Все три нажатия взводят таймер до того, как истечёт первый.
        let (fired, _) = block_on(futures::future::join(join_all(settles), async move {
            for tx in releases {
                let _ = tx.send(());
            }
        }));
        let fired: Vec<&str> = fired.into_iter().flatten().collect();
        assert_eq!(fired, vec!["shirt"]);
    }

    #[test]
    fn test_settle_after_pause_between_keys() {
        use futures::executor::block_on;
        use futures::future::ready;

        let debouncer = Debouncer::new();
        assert!(block_on(debouncer.settle_after(ready(()))));
        assert!(block_on(debouncer.settle_after(ready(()))));
    }

    #[test]
    fn test_cancel() {
        let debouncer = Debouncer::new();
        let token = debouncer.arm();
        debouncer.cancel();
        assert!(!debouncer.is_current(token));
    }
}
