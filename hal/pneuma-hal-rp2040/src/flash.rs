//! Settings partition on the RP2040 QSPI flash
//!
//! The last 64KB of the 2MB flash hold a `sequential-storage` map. The
//! linker script ends the firmware image before this range.
//!
//! Removal writes an empty record over the key. `sequential-storage` only
//! supports true removal on multiwrite flash, and an empty settings record
//! is never valid anyway.

use core::ops::Range;

use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

use pneuma_hal::flash::{FlashError, FlashStorage, StorageKey};

/// Total flash on the Pico
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Size of the settings partition at the top of flash
pub const PARTITION_SIZE: usize = 64 * 1024;

/// Byte range of the settings partition, relative to the flash base
pub const SETTINGS_RANGE: Range<u32> = (FLASH_SIZE - PARTITION_SIZE) as u32..FLASH_SIZE as u32;

const _: () = assert!(PARTITION_SIZE % ERASE_SIZE == 0);

/// Scratch space for one map item (key byte, header, record)
const SCRATCH_SIZE: usize = 256;

/// `FlashStorage` over the settings partition
pub struct Rp2040FlashStorage<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
    scratch: [u8; SCRATCH_SIZE],
}

impl<'d> Rp2040FlashStorage<'d> {
    /// Take the flash peripheral and a DMA channel for async reads
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
            scratch: [0; SCRATCH_SIZE],
        }
    }

    /// Latest non-empty record under `key`
    async fn fetch(&mut self, key: StorageKey) -> Result<Option<&[u8]>, FlashError> {
        map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut self.scratch,
            &key,
        )
        .await
        .map(|item| item.filter(|data| !data.is_empty()))
        .map_err(map_error)
    }
}

impl FlashStorage for Rp2040FlashStorage<'_> {
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        let data = self.fetch(key).await?.ok_or(FlashError::NotFound)?;
        let dest = buffer
            .get_mut(..data.len())
            .ok_or(FlashError::BufferTooSmall)?;
        dest.copy_from_slice(data);
        Ok(data.len())
    }

    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        map::store_item(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut self.scratch,
            &key,
            &data,
        )
        .await
        .map_err(map_error)
    }

    async fn remove(&mut self, key: StorageKey) -> Result<(), FlashError> {
        if self.fetch(key).await?.is_none() {
            return Ok(());
        }
        self.write(key, &[]).await
    }

    async fn exists(&mut self, key: StorageKey) -> bool {
        matches!(self.fetch(key).await, Ok(Some(_)))
    }
}

fn map_error<E>(error: sequential_storage::Error<E>) -> FlashError {
    match error {
        sequential_storage::Error::Storage { .. } => FlashError::Device,
        sequential_storage::Error::FullStorage => FlashError::Full,
        sequential_storage::Error::Corrupted { .. } => FlashError::Corrupted,
        sequential_storage::Error::ItemTooBig => FlashError::BufferTooSmall,
        _ => FlashError::Map,
    }
}
