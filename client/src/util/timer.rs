//! One-shot delays on the browser event loop.

/// Run `f` after `ms` milliseconds. Dropped silently during SSR.
pub fn after_ms<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ms, f);
    }
}
