//! Decoding of the per-pin control bits, and the `show` listing.

use core::fmt;
use std::io::Write;

use crate::layout::Register;
use crate::low::io::PortView;
use crate::low::register::GpioRegisters;
use crate::pin::{Pin, PortId};
use crate::{IoDir, Level, Trigger};

/// What a pin is configured as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// INT set. The interrupt is enabled when MSK is clear.
    Interrupt { trigger: Trigger, enabled: bool },
    /// INT clear, MSK set. `level` is the live input for inputs and the
    /// driven value for outputs.
    Gpio { dir: IoDir, level: Level },
    /// INT and MSK clear: alternate function `PAT1:PAT0`.
    Function(u8),
}

impl PinMode {
    /// Decode the four control bits of a pin, plus its input level.
    pub const fn decode(int: bool, msk: bool, pat1: bool, pat0: bool, inl: bool) -> Self {
        if int {
            PinMode::Interrupt {
                trigger: Trigger::from_bits(pat1, pat0),
                enabled: !msk,
            }
        } else if msk {
            if pat1 {
                PinMode::Gpio {
                    dir: IoDir::In,
                    level: if inl { Level::High } else { Level::Low },
                }
            } else {
                PinMode::Gpio {
                    dir: IoDir::Out,
                    level: if pat0 { Level::High } else { Level::Low },
                }
            }
        } else {
            PinMode::Function((pat1 as u8) << 1 | pat0 as u8)
        }
    }
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinMode::Interrupt { trigger, enabled } => write!(
                f,
                "INTERRUPT {trigger} {}",
                if *enabled { "ENABLED" } else { "DISABLED" }
            ),
            PinMode::Gpio { dir, level } => write!(f, "GPIO {dir} {level}"),
            PinMode::Function(n) => write!(f, "FUNCTION {n}"),
        }
    }
}

/// Snapshot of the registers that decide pin modes on one port.
struct PortState {
    int: u32,
    msk: u32,
    pat1: u32,
    pat0: u32,
    inl: u32,
}

impl PortState {
    fn read<R: GpioRegisters + ?Sized>(port: &PortView<'_, R>) -> Self {
        Self {
            int: port.read(Register::Int),
            msk: port.read(Register::Msk),
            pat1: port.read(Register::Pat1),
            pat0: port.read(Register::Pat0),
            inl: port.read(Register::Inl),
        }
    }

    fn mode(&self, bit: u8) -> PinMode {
        let get = |word: u32| (word >> bit) & 1 != 0;
        PinMode::decode(
            get(self.int),
            get(self.msk),
            get(self.pat1),
            get(self.pat0),
            get(self.inl),
        )
    }
}

/// Print every pin of every port, one block per port.
pub fn show_all<R, W>(regs: &R, out: &mut W) -> std::io::Result<()>
where
    R: GpioRegisters + ?Sized,
    W: Write + ?Sized,
{
    for port in PortId::ALL {
        show_port(regs, port, out)?;
    }
    Ok(())
}

/// Print the block of a single port: header, 32 pin lines, blank line.
pub fn show_port<R, W>(regs: &R, port: PortId, out: &mut W) -> std::io::Result<()>
where
    R: GpioRegisters + ?Sized,
    W: Write + ?Sized,
{
    let state = PortState::read(&PortView::new(regs, port));

    writeln!(out, "Port {port}")?;
    writeln!(out, "================")?;
    for pin in Pin::all_of(port) {
        writeln!(out, "{pin}: {}", state.mode(pin.offset()))?;
    }
    writeln!(out)
}
