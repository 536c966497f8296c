//! Persisted language preference, shared with components through context.

use std::cell::RefCell;
use std::collections::HashMap;

use log::{info, warn};
use thiserror::Error;
use web_sys::window;
use yew::prelude::*;

use crate::i18n::Locale;

/// Local storage slot holding the locale code.
pub const LANGUAGE_KEY: &str = "xval_lang";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

/// Minimal key-value contract the preference store needs.
pub trait KeyValueStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected(format!("{:?}", e)))
    }
}

/// Session-only storage, used when the browser refuses local storage.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Language preference backed by a key-value slot.
///
/// The stored value is read once, on `load`. After that the in-memory value
/// is authoritative: a failed write is logged and otherwise ignored.
pub struct LanguageStore<S> {
    storage: S,
    current: Locale,
}

impl<S: KeyValueStorage> LanguageStore<S> {
    pub fn load(storage: S) -> Self {
        let current = storage
            .read(LANGUAGE_KEY)
            .and_then(|raw| Locale::from_code(&raw))
            .unwrap_or_default();
        Self { storage, current }
    }

    pub fn get(&self) -> Locale {
        self.current
    }

    pub fn set(&mut self, locale: Locale) {
        self.current = locale;
        if let Err(e) = self.storage.write(LANGUAGE_KEY, locale.code()) {
            warn!("Keeping language preference for this session only: {}", e);
        }
    }
}

pub type BrowserLanguageStore = LanguageStore<Box<dyn KeyValueStorage>>;

impl BrowserLanguageStore {
    /// Store over local storage, falling back to memory when it is missing.
    pub fn from_browser() -> Self {
        let storage: Box<dyn KeyValueStorage> = match BrowserStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                warn!("Language preference will not persist: {}", e);
                Box::new(MemoryStorage::default())
            }
        };
        Self::load(storage)
    }
}

impl KeyValueStorage for Box<dyn KeyValueStorage> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Current locale plus the setter, handed down from `App`.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub locale: Locale,
    pub set: Callback<Locale>,
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

/// Owns the store for the app lifetime and provides `LanguageContext`.
#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let store = use_mut_ref(BrowserLanguageStore::from_browser);
    let locale = use_state({
        let store = store.clone();
        move || store.borrow().get()
    });

    // Mirror the locale on <html lang="..">.
    {
        use_effect_with_deps(
            move |locale: &Locale| {
                if let Some(root) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", locale.html_lang());
                }
                || ()
            },
            *locale,
        );
    }

    let set = {
        let store = store.clone();
        let locale = locale.clone();
        Callback::from(move |next: Locale| {
            if *locale != next {
                info!("Switching language to {}", next.code());
            }
            store.borrow_mut().set(next);
            locale.set(next);
        })
    };

    let context = LanguageContext {
        locale: *locale,
        set,
    };

    html! {
        <ContextProvider<LanguageContext> {context}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}

/// Reads the language context, defaulting when rendered outside a provider.
#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(|| LanguageContext {
        locale: Locale::default(),
        set: Callback::noop(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage {
        stored: Option<String>,
    }

    impl KeyValueStorage for BrokenStorage {
        fn read(&self, _key: &str) -> Option<String> {
            self.stored.clone()
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteRejected("QuotaExceededError".to_string()))
        }
    }

    fn seeded(value: &str) -> MemoryStorage {
        let storage = MemoryStorage::default();
        storage.write(LANGUAGE_KEY, value).unwrap();
        storage
    }

    #[test]
    fn set_then_get_round_trips_both_locales() {
        let mut store = LanguageStore::load(MemoryStorage::default());
        for locale in [Locale::En, Locale::Pt, Locale::En] {
            store.set(locale);
            assert_eq!(store.get(), locale);
            assert_eq!(store.storage.read(LANGUAGE_KEY).as_deref(), Some(locale.code()));
        }
    }

    #[test]
    fn absent_value_falls_back_to_default() {
        let store = LanguageStore::load(MemoryStorage::default());
        assert_eq!(store.get(), Locale::Pt);
    }

    #[test]
    fn unrecognised_value_falls_back_to_default() {
        for raw in ["fr", "EN", " en", ""] {
            let store = LanguageStore::load(seeded(raw));
            assert_eq!(store.get(), Locale::Pt, "stored {raw:?}");
        }
    }

    #[test]
    fn stored_value_is_read_at_load() {
        let store = LanguageStore::load(seeded("en"));
        assert_eq!(store.get(), Locale::En);
    }

    #[test]
    fn set_is_idempotent() {
        let mut store = LanguageStore::load(MemoryStorage::default());
        store.set(Locale::En);
        store.set(Locale::En);
        assert_eq!(store.get(), Locale::En);
        assert_eq!(store.storage.read(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn failed_write_keeps_session_value() {
        let mut store = LanguageStore::load(BrokenStorage {
            stored: Some("pt".to_string()),
        });
        store.set(Locale::En);
        assert_eq!(store.get(), Locale::En);
    }
}
