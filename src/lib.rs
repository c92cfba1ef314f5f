//! jz-gpio — GPIO register inspection for Ingenic SoCs.
//!
//! The crate models the GPIO controller found on Ingenic MIPS SoCs (JZ47xx,
//! X1000 family): seven 32-pin ports, each a fixed block of 32-bit registers.
//! Pin state is spread over four control bits (INT, MSK, PAT1, PAT0) and is
//! changed through dedicated set/clear registers.
//!
//! Register access goes through the [`GpioRegisters`] trait so the command
//! and show layers run unchanged against the real `/dev/mem` window
//! ([`DevMem`]) or an in-memory bank ([`SimulatedRegisters`]).
//!
//! ```no_run
//! use jz_gpio::{Command, Config, DevMem, Pin};
//!
//! let mut regs = DevMem::open(&Config::default())?;
//! let pin: Pin = "PC23".parse()?;
//! Command::GpioInput.execute(&mut regs, pin, None, &mut std::io::stdout())?;
//! # Ok::<(), jz_gpio::Error>(())
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod layout;
mod low;
pub mod mem;
pub mod pin;
pub mod show;
pub mod sim;

use core::fmt;

pub use command::Command;
pub use config::Config;
pub use error::Error;
pub use low::{
    io::{BitRegister, Port, PortView},
    register::GpioRegisters,
};
pub use mem::DevMem;
pub use pin::{Pin, PortId};
pub use sim::SimulatedRegisters;

/// Interrupt trigger selected by PAT1/PAT0 when INT is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Interrupt while the pin is low.
    LowLevel,
    /// Interrupt while the pin is high.
    HighLevel,
    /// Interrupt on falling edge.
    FallingEdge,
    /// Interrupt on rising edge.
    RisingEdge,
}

impl Trigger {
    /// Decode from PAT1 (level/edge) and PAT0 (polarity).
    pub const fn from_bits(pat1: bool, pat0: bool) -> Self {
        match (pat1, pat0) {
            (false, false) => Trigger::LowLevel,
            (false, true) => Trigger::HighLevel,
            (true, false) => Trigger::FallingEdge,
            (true, true) => Trigger::RisingEdge,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trigger::LowLevel => "LOW_LEVEL",
            Trigger::HighLevel => "HIGH_LEVEL",
            Trigger::FallingEdge => "FALLING_EDGE",
            Trigger::RisingEdge => "RISING_EDGE",
        })
    }
}

/// Logical level of a GPIO pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Logical low / 0.
    Low,
    /// Logical high / 1.
    High,
}

impl From<bool> for Level {
    fn from(bit: bool) -> Self {
        if bit { Level::High } else { Level::Low }
    }
}

/// Printed as the bit value, `0` or `1`.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Low => "0",
            Level::High => "1",
        })
    }
}

/// Direction of a pin in GPIO mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoDir {
    /// PAT1 set.
    In,
    /// PAT1 clear.
    Out,
}

impl fmt::Display for IoDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IoDir::In => "INPUT",
            IoDir::Out => "OUTPUT",
        })
    }
}
