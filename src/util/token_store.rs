//! Durable storage for the auth token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store and the API client both read the token; only the session
//! store writes it. The browser implementation is backed by `localStorage`
//! under a single key that logout removes wholesale.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// Read/write access to a single persisted token.
pub trait TokenStore {
    /// Stored token, if any. Empty strings count as absent.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// `localStorage`-backed token store. Inert outside the browser.
#[derive(Clone, Copy, Debug)]
pub struct BrowserTokenStore {
    key: &'static str,
}

impl BrowserTokenStore {
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[cfg(feature = "csr")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = Self::storage()?.get_item(self.key).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = Self::storage() else {
                return;
            };
            report_storage_write("persist", storage.set_item(self.key, token));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::storage() {
                report_storage_write("remove", storage.remove_item(self.key));
            }
        }
    }
}

/// Warn when a `localStorage` write fails. A failed removal leaves the token
/// in place for the next reload even though the session looks signed out.
#[cfg(any(test, feature = "csr"))]
fn report_storage_write<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("failed to {action} auth token: {err:?}");
            false
        }
    }
}

/// In-memory token store; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone().and_then(non_empty)
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}
