//! Persistent record storage
//!
//! Records are opaque byte strings addressed by a one-byte key. The coach
//! keeps a single record (the settings document), but the on-flash map is
//! keyed so a second record does not change the format.

/// Record identifiers in the storage map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Settings document (`key = value` text)
    Settings = 0x01,
}

impl From<StorageKey> for u8 {
    fn from(key: StorageKey) -> u8 {
        key as u8
    }
}

impl TryFrom<u8> for StorageKey {
    type Error = FlashError;

    /// An unknown key byte on flash means the map is from another build
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(StorageKey::Settings),
            _ => Err(FlashError::Corrupted),
        }
    }
}

/// Record storage failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlashError {
    /// The flash device rejected a read, write or erase
    Device,
    /// The map layer failed for another reason
    Map,
    /// No record under this key
    NotFound,
    /// Record does not fit the caller's buffer or the item scratch space
    BufferTooSmall,
    /// Stored data failed its integrity check
    Corrupted,
    /// No room left even after garbage collection
    Full,
}

/// Wear-levelled record storage
///
/// Writes replace the whole record. Implementations are expected to survive
/// power loss mid-write by keeping the previous record readable.
#[allow(async_fn_in_trait)]
pub trait FlashStorage {
    /// Copy the record under `key` into `buffer`
    ///
    /// Returns the record length, or [`FlashError::NotFound`] if the key has
    /// never been written or was removed.
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError>;

    /// Store `data` under `key`, replacing any previous record
    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError>;

    /// Drop the record under `key`
    ///
    /// Removing a missing key is not an error.
    async fn remove(&mut self, key: StorageKey) -> Result<(), FlashError>;

    /// Check whether a record is stored under `key`
    async fn exists(&mut self, key: StorageKey) -> bool {
        matches!(
            self.read(key, &mut []).await,
            Ok(_) | Err(FlashError::BufferTooSmall)
        )
    }
}

#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for StorageKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        let slot = buffer
            .first_mut()
            .ok_or(sequential_storage::map::SerializationError::BufferTooSmall)?;
        *slot = u8::from(*self);
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        let byte = buffer
            .first()
            .ok_or(sequential_storage::map::SerializationError::BufferTooSmall)?;
        StorageKey::try_from(*byte)
            .map(|key| (key, 1))
            .map_err(|_| sequential_storage::map::SerializationError::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single-record store for exercising the default `exists`
    struct OneRecord(Option<&'static [u8]>);

    impl FlashStorage for OneRecord {
        async fn read(&mut self, _key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
            let data = self.0.ok_or(FlashError::NotFound)?;
            let dest = buffer
                .get_mut(..data.len())
                .ok_or(FlashError::BufferTooSmall)?;
            dest.copy_from_slice(data);
            Ok(data.len())
        }

        async fn write(&mut self, _key: StorageKey, _data: &[u8]) -> Result<(), FlashError> {
            Err(FlashError::Device)
        }

        async fn remove(&mut self, _key: StorageKey) -> Result<(), FlashError> {
            self.0 = None;
            Ok(())
        }
    }

    #[test]
    fn test_key_byte() {
        assert_eq!(u8::from(StorageKey::Settings), 0x01);
        assert_eq!(StorageKey::try_from(0x01), Ok(StorageKey::Settings));
        assert_eq!(StorageKey::try_from(0x00), Err(FlashError::Corrupted));
        assert_eq!(StorageKey::try_from(0xFF), Err(FlashError::Corrupted));
    }

    #[test]
    fn test_exists_probes_with_read() {
        let mut store = OneRecord(Some(&b"total_duration = 5"[..]));
        assert!(embassy_futures::block_on(store.exists(StorageKey::Settings)));

        let mut store = OneRecord(Some(&[]));
        assert!(embassy_futures::block_on(store.exists(StorageKey::Settings)));

        let mut store = OneRecord(None);
        assert!(!embassy_futures::block_on(store.exists(StorageKey::Settings)));
    }
}
