//! Where the register window lives.

use std::env;
use std::path::PathBuf;

use crate::error::Error;
use crate::layout::{GPIO_BASE, MIN_WINDOW};

/// Environment variable overriding [`Config::device`].
pub const DEVICE_ENV: &str = "JZ_GPIO_DEVICE";

/// Default physical memory device.
pub const DEFAULT_DEVICE: &str = "/dev/mem";

/// Default size of the mapped window.
pub const DEFAULT_WINDOW: usize = 0x10000;

/// Location and size of the mapped controller window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Device file backing physical memory.
    pub device: PathBuf,
    /// Physical address of the GPIO controller; offset into `device`.
    pub base: u64,
    /// Number of bytes to map.
    pub window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            base: GPIO_BASE,
            window: DEFAULT_WINDOW,
        }
    }
}

impl Config {
    /// Defaults, with the device taken from `JZ_GPIO_DEVICE` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(device) = env::var_os(DEVICE_ENV).filter(|d| !d.is_empty()) {
            config.device = PathBuf::from(device);
        }
        config
    }

    /// Check that the window covers every port.
    pub fn validate(&self) -> Result<(), Error> {
        if self.window < MIN_WINDOW {
            return Err(Error::WindowTooSmall(self.window));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hardware() {
        let config = Config::default();
        assert_eq!(config.device, PathBuf::from("/dev/mem"));
        assert_eq!(config.base, 0x1001_0000);
        assert_eq!(config.window, 0x10000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn small_window_rejected() {
        let config = Config {
            window: 0x600,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::WindowTooSmall(0x600))));
    }
}
