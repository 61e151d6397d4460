use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::persisted::{SESSION_KEY, SESSION_VERSION, SETTINGS_KEY, SETTINGS_VERSION};
use crate::persisted::{SessionRecord, SettingsBlob, PROGRESS_KEY_PREFIX};
#[cfg(target_arch = "wasm32")]
use sipjamalpuri_core::{decode_record, encode_record};
use sipjamalpuri_core::{ProgressSnapshot, PROGRESS_SNAPSHOT_VERSION};

thread_local! {
    static SETTINGS_CACHE: RefCell<Option<SettingsBlob>> = RefCell::new(None);
    static SESSION_CACHE: RefCell<Option<SessionRecord>> = RefCell::new(None);
}

/// Loads the persisted records into the caches. Missing or corrupt values
/// fall back to defaults; storage failures are never fatal.
pub(crate) fn bootstrap() {
    let settings = load_settings_blob().unwrap_or_default();
    let session = load_session_record().unwrap_or_default();
    SETTINGS_CACHE.with(|slot| {
        *slot.borrow_mut() = Some(settings);
    });
    SESSION_CACHE.with(|slot| {
        *slot.borrow_mut() = Some(session);
    });
}

pub(crate) fn settings_blob() -> SettingsBlob {
    SETTINGS_CACHE
        .with(|slot| slot.borrow().clone())
        .unwrap_or_default()
}

pub(crate) fn update_settings_blob<F>(update: F) -> SettingsBlob
where
    F: FnOnce(&mut SettingsBlob),
{
    let settings = SETTINGS_CACHE.with(|slot| {
        let mut settings = slot.borrow().clone().unwrap_or_default();
        update(&mut settings);
        *slot.borrow_mut() = Some(settings.clone());
        settings
    });
    save_settings_blob(&settings);
    settings
}

pub(crate) fn session_record() -> SessionRecord {
    SESSION_CACHE
        .with(|slot| slot.borrow().clone())
        .unwrap_or_default()
}

pub(crate) fn update_session_record<F>(update: F) -> SessionRecord
where
    F: FnOnce(&mut SessionRecord),
{
    let record = SESSION_CACHE.with(|slot| {
        let mut record = slot.borrow().clone().unwrap_or_default();
        update(&mut record);
        *slot.borrow_mut() = Some(record.clone());
        record
    });
    save_session_record(&record);
    record
}

pub(crate) fn progress_key(topic: &str) -> String {
    format!("{PROGRESS_KEY_PREFIX}.{topic}")
}

/// Missing, unparsable or stale-versioned values read as absent progress.
pub(crate) fn load_progress(topic: &str) -> Option<ProgressSnapshot> {
    let raw = read_raw(&progress_key(topic))?;
    let snapshot: ProgressSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(_) => {
            #[cfg(target_arch = "wasm32")]
            {
                gloo::console::warn!("progress: corrupt value", progress_key(topic));
            }
            return None;
        }
    };
    if snapshot.version != PROGRESS_SNAPSHOT_VERSION {
        return None;
    }
    Some(snapshot)
}

/// Fire-and-forget; a lost write leaves the in-memory state authoritative.
pub(crate) fn save_progress(topic: &str, snapshot: &ProgressSnapshot) {
    let Ok(raw) = serde_json::to_string(snapshot) else {
        return;
    };
    let key = progress_key(topic);
    write_deferred(key, raw);
}

pub(crate) fn clear_progress(topic: &str) {
    remove_raw(&progress_key(topic));
}

fn load_settings_blob() -> Option<SettingsBlob> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = read_raw(SETTINGS_KEY)?;
        let settings = decode_record::<SettingsBlob>(&raw);
        if settings.is_none() {
            gloo::console::warn!("store: corrupt settings record");
        }
        settings.filter(|blob| blob.version == SETTINGS_VERSION)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn save_settings_blob(settings: &SettingsBlob) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(raw) = encode_record(settings) else {
            gloo::console::warn!("store: settings encode failed");
            return;
        };
        write_deferred(SETTINGS_KEY.to_string(), raw);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = settings;
    }
}

fn load_session_record() -> Option<SessionRecord> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = read_raw(SESSION_KEY)?;
        decode_record::<SessionRecord>(&raw).filter(|record| record.version == SESSION_VERSION)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn save_session_record(record: &SessionRecord) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(raw) = encode_record(record) else {
            gloo::console::warn!("store: session encode failed");
            return;
        };
        write_deferred(SESSION_KEY.to_string(), raw);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = record;
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn read_raw(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

fn write_deferred(key: String, value: String) {
    #[cfg(target_arch = "wasm32")]
    {
        spawn_local(async move {
            let Some(storage) = local_storage() else {
                gloo::console::warn!("store: storage unavailable");
                return;
            };
            if storage.set_item(&key, &value).is_err() {
                gloo::console::warn!("store: write failed", key);
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
    }
}

fn remove_raw(key: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
    }
}
