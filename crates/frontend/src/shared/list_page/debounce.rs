//! Debounce по заднему фронту, привязанный к экземпляру списка.
//!
//! Каждое `schedule` выдаёт новый номер поколения; таймер, проснувшись,
//! забирает значение только если его поколение всё ещё последнее.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone)]
pub struct Debouncer<V> {
    delay_ms: u32,
    generation: u64,
    pending: Option<V>,
}

impl<V> Debouncer<V> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Запоминает значение и перезапускает окно ожидания
    pub fn schedule(&mut self, value: V) -> u64 {
        self.generation += 1;
        self.pending = Some(value);
        self.generation
    }

    /// Вызывается по таймеру; устаревшие поколения ничего не получают
    pub fn fire(&mut self, ticket: u64) -> Option<V> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

/// Планирует `commit` через задержку debouncer'а.
///
/// Если за это время пришло новое значение или владелец страницы
/// уничтожен, `commit` не вызывается.
pub fn debounce<V, F>(store: StoredValue<Debouncer<V>>, value: V, commit: F)
where
    V: Send + Sync + 'static,
    F: FnOnce(V) + 'static,
{
    let Some((ticket, delay)) = store.try_update_value(|d| (d.schedule(value), d.delay_ms())) else {
        return;
    };

    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        if let Some(Some(value)) = store.try_update_value(|d| d.fire(ticket)) {
            commit(value);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_value_fires() {
        let mut d = Debouncer::new(SEARCH_DEBOUNCE_MS);
        let t1 = d.schedule("wid".to_string());
        let t2 = d.schedule("widget".to_string());

        // таймер первого нажатия просыпается раньше
        assert_eq!(d.fire(t1), None);
        assert_eq!(d.fire(t2).as_deref(), Some("widget"));
        // второй раз то же поколение ничего не даёт
        assert_eq!(d.fire(t2), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut d = Debouncer::new(10);
        let t = d.schedule(1);
        d.cancel();
        assert_eq!(d.fire(t), None);
        // новое значение после отмены срабатывает как обычно
        let t = d.schedule(2);
        assert_eq!(d.fire(t), Some(2));
    }

    #[test]
    fn test_separate_instances_do_not_interfere() {
        let mut a = Debouncer::new(10);
        let mut b = Debouncer::new(10);
        let ta = a.schedule("a");
        let tb = b.schedule("b");
        assert_eq!(a.fire(ta), Some("a"));
        assert_eq!(b.fire(tb), Some("b"));
    }
}
