use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Calls `on_tick` every `period_ms` for as long as the component is mounted.
/// The first call happens one period after mount.
pub fn use_interval<F>(period_ms: u32, on_tick: F)
where
    F: FnMut() + 'static,
{
    // Shared so the future can be rebuilt without moving the callback
    let on_tick = use_hook(|| Rc::new(RefCell::new(on_tick)));

    use_future(move || {
        let on_tick = Rc::clone(&on_tick);
        async move {
            loop {
                TimeoutFuture::new(period_ms).await;
                on_tick.borrow_mut()();
            }
        }
    });
}

/// Waits `ms` milliseconds.
pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}
