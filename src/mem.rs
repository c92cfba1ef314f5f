//! The register window mapped out of `/dev/mem`.

use std::fs::OpenOptions;
use std::os::unix::fs::OpenOptionsExt;
use std::ptr::{read_volatile, write_volatile};

use log::debug;
use memmap2::{MmapMut, MmapOptions};

use crate::config::Config;
use crate::error::Error;
use crate::low::register::GpioRegisters;

/// Physical memory mapped read/write for the lifetime of the value.
pub struct DevMem {
    map: MmapMut,
}

impl DevMem {
    /// Map `config.window` bytes of `config.device` at `config.base`.
    ///
    /// Typically needs root; a permission or I/O failure is returned as
    /// [`Error::Open`] or [`Error::Map`].
    pub fn open(config: &Config) -> Result<Self, Error> {
        config.validate()?;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(&config.device)
            .map_err(|source| Error::Open {
                path: config.device.clone(),
                source,
            })?;

        let map = unsafe {
            MmapOptions::new()
                .offset(config.base)
                .len(config.window)
                .map_mut(&file)
        }
        .map_err(Error::Map)?;

        debug!(
            "mapped {:#x} bytes at {:#x} from {}",
            config.window,
            config.base,
            config.device.display()
        );
        Ok(Self { map })
    }

    fn check(&self, offset: usize) {
        assert!(
            offset % 4 == 0 && offset + 4 <= self.map.len(),
            "register offset {offset:#x} outside the mapped window"
        );
    }
}

impl GpioRegisters for DevMem {
    fn read_register(&self, offset: usize) -> u32 {
        self.check(offset);
        // SAFETY: in bounds and aligned; the mapping is page aligned.
        unsafe { read_volatile(self.map.as_ptr().add(offset) as *const u32) }
    }

    fn write_register(&mut self, offset: usize, value: u32) {
        self.check(offset);
        // SAFETY: as above.
        unsafe { write_volatile(self.map.as_mut_ptr().add(offset) as *mut u32, value) }
    }
}
