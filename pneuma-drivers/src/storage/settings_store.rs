//! Settings persistence
//!
//! Stores [`BreathingSettings`] as a text document under
//! [`StorageKey::Settings`]. A failed load is never fatal: the caller keeps
//! whatever settings it already had.

use pneuma_core::settings::document::{decode, encode, DocumentError, DOCUMENT_CAPACITY};
use pneuma_core::settings::BreathingSettings;
use pneuma_hal::flash::{FlashError, FlashStorage, StorageKey};

/// Settings store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Flash read or write failed
    Flash(FlashError),
    /// Stored bytes are not a valid settings document
    Document(DocumentError),
    /// Stored bytes are not UTF-8
    Encoding,
}

impl From<FlashError> for StoreError {
    fn from(e: FlashError) -> Self {
        StoreError::Flash(e)
    }
}

impl From<DocumentError> for StoreError {
    fn from(e: DocumentError) -> Self {
        StoreError::Document(e)
    }
}

/// Settings persistence over a flash key-value store
pub struct SettingsStore<S> {
    storage: S,
}

impl<S: FlashStorage> SettingsStore<S> {
    /// Create a store over `storage`
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Release the underlying storage
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Load persisted settings into `settings`
    ///
    /// Returns `false` and leaves `settings` untouched when nothing is
    /// stored or the stored document is unreadable.
    pub async fn load(&mut self, settings: &mut BreathingSettings) -> bool {
        match self.read(settings).await {
            Ok(loaded) => {
                *settings = loaded;
                #[cfg(feature = "defmt")]
                defmt::info!(
                    "Settings loaded: {} min, half-seconds {}",
                    loaded.total_duration,
                    loaded.half_seconds
                );
                true
            }
            #[allow(unused_variables)]
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Settings load failed ({}), keeping current values", e);
                false
            }
        }
    }

    async fn read(&mut self, base: &BreathingSettings) -> Result<BreathingSettings, StoreError> {
        let mut buffer = [0u8; DOCUMENT_CAPACITY];
        let len = self.storage.read(StorageKey::Settings, &mut buffer).await?;
        let text = core::str::from_utf8(&buffer[..len]).map_err(|_| StoreError::Encoding)?;
        Ok(decode(text, base)?)
    }

    /// Overwrite the persisted document with `settings`
    pub async fn save(&mut self, settings: &BreathingSettings) -> Result<(), StoreError> {
        let document = encode(settings)?;
        self.storage
            .write(StorageKey::Settings, document.as_bytes())
            .await?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Settings saved ({} bytes)", document.len());
        Ok(())
    }

    /// Restore factory defaults and discard the persisted document
    pub async fn reset(&mut self, settings: &mut BreathingSettings) -> Result<(), StoreError> {
        settings.reset();
        self.storage.remove(StorageKey::Settings).await?;

        #[cfg(feature = "defmt")]
        defmt::info!("Settings reset to factory defaults");
        Ok(())
    }

    /// Check whether a document is stored
    pub async fn has_saved(&mut self) -> bool {
        self.storage.exists(StorageKey::Settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use heapless::{LinearMap, Vec};
    use pneuma_core::settings::{Phase, Preset};

    type Record = Vec<u8, 256>;

    /// In-memory flash keyed like the real map
    #[derive(Default)]
    struct MemoryFlash {
        records: LinearMap<StorageKey, Record, 2>,
        fail_writes: bool,
    }

    impl MemoryFlash {
        fn with_settings(text: &[u8]) -> Self {
            let mut flash = Self::default();
            flash
                .records
                .insert(StorageKey::Settings, Record::from_slice(text).unwrap())
                .unwrap();
            flash
        }

        fn settings_record(&self) -> Option<&[u8]> {
            self.records.get(&StorageKey::Settings).map(|r| r.as_slice())
        }
    }

    impl FlashStorage for MemoryFlash {
        async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
            let data = self.records.get(&key).ok_or(FlashError::NotFound)?;
            if buffer.len() < data.len() {
                return Err(FlashError::BufferTooSmall);
            }
            buffer[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }

        async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
            if self.fail_writes {
                return Err(FlashError::Device);
            }
            let record = Record::from_slice(data).map_err(|_| FlashError::Full)?;
            self.records
                .insert(key, record)
                .map_err(|_| FlashError::Full)?;
            Ok(())
        }

        async fn remove(&mut self, key: StorageKey) -> Result<(), FlashError> {
            self.records.remove(&key);
            Ok(())
        }
    }

    #[test]
    fn test_load_missing_keeps_values() {
        let mut store = SettingsStore::new(MemoryFlash::default());
        let mut settings = BreathingSettings::default();
        settings.total_duration = 42;
        let before = settings;

        assert!(!block_on(store.load(&mut settings)));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = SettingsStore::new(MemoryFlash::default());
        let mut saved = BreathingSettings::default();
        saved.total_duration = 15;
        saved.apply_preset(Preset::Golden);

        block_on(store.save(&saved)).unwrap();
        assert!(block_on(store.has_saved()));

        let mut loaded = BreathingSettings::default();
        assert!(block_on(store.load(&mut loaded)));
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_load_malformed_keeps_values() {
        let flash = MemoryFlash::with_settings(b"total_duration = 5\nhalf_seconds_in = lots\n");
        let mut store = SettingsStore::new(flash);

        let mut settings = BreathingSettings::default();
        settings.set_half_seconds(Phase::Out, 20);
        let before = settings;

        assert!(!block_on(store.load(&mut settings)));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_load_invalid_utf8() {
        let flash = MemoryFlash::with_settings(&[0xFF, 0xFE, b'=', b'1']);
        let mut store = SettingsStore::new(flash);
        let mut settings = BreathingSettings::default();

        assert_eq!(
            block_on(store.read(&BreathingSettings::default())),
            Err(StoreError::Encoding)
        );
        assert!(!block_on(store.load(&mut settings)));
    }

    #[test]
    fn test_load_reports_document_error() {
        let flash = MemoryFlash::with_settings(b"half_seconds_in = 0\n");
        let mut store = SettingsStore::new(flash);

        assert_eq!(
            block_on(store.read(&BreathingSettings::default())),
            Err(StoreError::Document(DocumentError::OutOfRange))
        );
    }

    #[test]
    fn test_reset_discards_document() {
        let mut store = SettingsStore::new(MemoryFlash::default());
        let mut settings = BreathingSettings::default();
        settings.total_duration = 60;
        settings.apply_preset(Preset::Box);
        block_on(store.save(&settings)).unwrap();

        block_on(store.reset(&mut settings)).unwrap();

        assert_eq!(settings, BreathingSettings::default());
        assert!(!block_on(store.has_saved()));
        assert_eq!(store.into_inner().settings_record(), None);
    }

    #[test]
    fn test_save_failure_propagates() {
        let flash = MemoryFlash {
            fail_writes: true,
            ..Default::default()
        };
        let mut store = SettingsStore::new(flash);

        assert_eq!(
            block_on(store.save(&BreathingSettings::default())),
            Err(StoreError::Flash(FlashError::Device))
        );
    }
}
