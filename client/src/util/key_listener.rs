//! Scoped global key listeners.
//!
//! ARCHITECTURE
//! ============
//! A `KeyListenerScope` holds at most one listener attached through a
//! `KeyListenerHost`. `sync(true, ..)` attaches if nothing is attached,
//! `sync(false, ..)` releases, and dropping the scope releases too, so every
//! exit path (explicit close, Escape, page teardown) detaches the listener.
//!
//! `WindowKeyHost` binds to `window` keydown in the browser and is inert in
//! SSR and native test builds.

#[cfg(test)]
#[path = "key_listener_test.rs"]
mod key_listener_test;

use std::sync::Arc;

/// Handler invoked when the watched key is pressed.
pub type KeyHandler = Arc<dyn Fn() + Send + Sync>;

/// Detaches a listener when run. Produced by `KeyListenerHost::attach`.
pub struct ListenerRelease(Box<dyn FnOnce() + Send + Sync>);

impl ListenerRelease {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self(Box::new(release))
    }

    pub fn release(self) {
        (self.0)();
    }
}

impl std::fmt::Debug for ListenerRelease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ListenerRelease")
    }
}

/// Something global key listeners can be attached to.
pub trait KeyListenerHost: Send + Sync + 'static {
    /// Attach a keydown listener firing `on_key` when `KeyboardEvent.key == key`.
    fn attach(&self, key: &'static str, on_key: KeyHandler) -> ListenerRelease;
}

/// The browser `window`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowKeyHost;

impl KeyListenerHost for WindowKeyHost {
    fn attach(&self, key: &'static str, on_key: KeyHandler) -> ListenerRelease {
        #[cfg(feature = "hydrate")]
        {
            use leptos::prelude::window_event_listener;

            let handle = window_event_listener(leptos::ev::keydown, move |ev| {
                if ev.key() == key {
                    on_key();
                }
            });
            ListenerRelease::new(move || handle.remove())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, on_key);
            ListenerRelease::new(|| {})
        }
    }
}

#[derive(Debug)]
pub struct KeyListenerScope<H: KeyListenerHost> {
    host: H,
    key: &'static str,
    active: Option<ListenerRelease>,
}

impl<H: KeyListenerHost> KeyListenerScope<H> {
    pub fn new(host: H, key: &'static str) -> Self {
        Self { host, key, active: None }
    }

    pub fn is_attached(&self) -> bool {
        self.active.is_some()
    }

    /// Attach when `wanted` and nothing is attached; release when not `wanted`.
    pub fn sync(&mut self, wanted: bool, on_key: impl Fn() + Send + Sync + 'static) {
        if !wanted {
            self.release();
        } else if self.active.is_none() {
            self.active = Some(self.host.attach(self.key, Arc::new(on_key)));
        }
    }

    pub fn release(&mut self) {
        if let Some(active) = self.active.take() {
            active.release();
        }
    }
}

impl<H: KeyListenerHost> Drop for KeyListenerScope<H> {
    fn drop(&mut self) {
        self.release();
    }
}
