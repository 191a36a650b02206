//! Fire-and-forget async work for event handlers.

use std::future::Future;

/// Run `task` on the browser event loop. Dropped unpolled outside the browser.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
