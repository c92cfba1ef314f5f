//! Per-pin commands.
//!
//! Each command turns into one or more single-bit strobes of set/clear
//! registers, or a single read printed to the output.

use core::str::FromStr;
use std::io::Write;

use log::info;

use crate::Level;
use crate::error::Error;
use crate::layout::Signal;
use crate::low::io::Port;
use crate::low::register::GpioRegisters;
use crate::pin::Pin;

/// A per-pin command, named by its command line keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the input level (`inl`, `read`).
    Inl,
    /// Print the latched interrupt flag (`flg`).
    Flg,
    /// Interrupt enable (`int`).
    Int,
    /// Interrupt mask (`msk`).
    Msk,
    /// Pattern 0, the output data (`pat0`, `write`).
    Pat0,
    /// Pattern 1, the direction (`pat1`).
    Pat1,
    /// Pull enable (`pen`).
    Pen,
    /// `int 0`, `msk 1`, `pat1 1`.
    GpioInput,
    /// `int 0`, `msk 1`, `pat1 0`.
    GpioOutput,
    /// `int 0`, `msk 0`, then PAT1/PAT0 from bits 1/0 of the value.
    Func,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "inl" | "read" => Command::Inl,
            "flg" => Command::Flg,
            "int" => Command::Int,
            "msk" => Command::Msk,
            "pat0" | "write" => Command::Pat0,
            "pat1" => Command::Pat1,
            "pen" => Command::Pen,
            "gpio_input" => Command::GpioInput,
            "gpio_output" => Command::GpioOutput,
            "func" => Command::Func,
            _ => return Err(Error::UnknownCommand(s.to_owned())),
        })
    }
}

/// Parse a command value. Non-zero means "set".
pub fn parse_value(s: &str) -> Result<i64, Error> {
    s.parse().map_err(|_| Error::InvalidValue(s.to_owned()))
}

impl Command {
    /// Whether the command needs a value argument.
    pub const fn takes_value(self) -> bool {
        matches!(
            self,
            Command::Int
                | Command::Msk
                | Command::Pat0
                | Command::Pat1
                | Command::Pen
                | Command::Func
        )
    }

    /// Run the command against `pin`. Reads are printed to `out`.
    ///
    /// Fails with [`Error::MissingValue`] before touching any register when
    /// the command needs a value and `value` is `None`.
    pub fn execute<R, W>(
        self,
        regs: &mut R,
        pin: Pin,
        value: Option<i64>,
        out: &mut W,
    ) -> Result<(), Error>
    where
        R: GpioRegisters + ?Sized,
        W: Write + ?Sized,
    {
        let value = match (self.takes_value(), value) {
            (true, None) => return Err(Error::MissingValue),
            (_, value) => value.unwrap_or(0),
        };
        info!("{pin}: {self:?} {value}");

        let bit = pin.offset();
        let mut port = Port::new(regs, pin.port());

        match self {
            Command::Inl => writeln!(out, "{}", Level::from(port.view().input_level(bit)))?,
            Command::Flg => writeln!(out, "{}", Level::from(port.view().flag(bit)))?,
            Command::Int => port.signal(Signal::Int).write_bit(bit, value != 0),
            Command::Msk => port.signal(Signal::Msk).write_bit(bit, value != 0),
            Command::Pat0 => port.signal(Signal::Pat0).write_bit(bit, value != 0),
            Command::Pat1 => port.signal(Signal::Pat1).write_bit(bit, value != 0),
            Command::Pen => port.signal(Signal::Pen).write_bit(bit, value != 0),
            Command::GpioInput | Command::GpioOutput => {
                port.signal(Signal::Int).clear_bit(bit);
                port.signal(Signal::Msk).set_bit(bit);
                port.signal(Signal::Pat1)
                    .write_bit(bit, self == Command::GpioInput);
            }
            Command::Func => {
                port.signal(Signal::Int).clear_bit(bit);
                port.signal(Signal::Msk).clear_bit(bit);
                port.signal(Signal::Pat1).write_bit(bit, value & 0b10 != 0);
                port.signal(Signal::Pat0).write_bit(bit, value & 0b01 != 0);
            }
        }
        Ok(())
    }
}
