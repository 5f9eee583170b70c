use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Window resize listener that waits for `delay_ms` of inactivity
/// before invoking the callback, so chart re-renders don't fire on
/// every intermediate resize event.
///
/// The returned `EventListener` must be kept alive for the component
/// lifecycle; dropping it removes the listener.
pub fn debounced_resize_listener<F>(delay_ms: u32, callback: F) -> EventListener
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(&window().unwrap(), "resize", move |_| {
        // Cancel the pending timeout before scheduling a new one
        if let Some(handle) = pending.borrow_mut().take() {
            drop(handle);
        }

        let cb = callback.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    })
}
