//! Command line front end.

use std::io::Write;

use crate::command::{Command, parse_value};
use crate::error::Error;
use crate::low::register::GpioRegisters;
use crate::pin::Pin;
use crate::show::show_all;

pub const USAGE: &str = "\
Usage: jz_gpio <show|PIN COMMAND [VALUE]>
GPIO diagnostic tool for Ingenic SoCs.

Commands:
  inl                        Read input level
  flg                        Read interrupt flag
  int                        Set interrupt
  msk                        Set mask
  pat0                       Set pattern 0 (data)
  pat1                       Set pattern 1 (direction)
  pen                        Set pull enable
  gpio_input                 Shortcut of `int 0', `msk 1', `pat1 1'
  gpio_output                Shortcut of `int 0', `msk 1', `pat1 0'
  read                       Shortcut of `inl'
  write                      Shortcut of `pat0'
  func                       Shortcut of `int 0', `msk 0', `pat1 <1>', `pat0 <0>'

Examples:
  jz_gpio show
  jz_gpio pc23 gpio_input
  jz_gpio pc23 read
  jz_gpio pa00 gpio_output
  jz_gpio pa00 write 1
  jz_gpio pd00 func 0  # Set PD00 as ssi0_clk on X1000
  jz_gpio pd00 gpio_output  # Revert to GPIO mode
";

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: print usage, exit 1.
    Usage,
    /// `-h` / `--help`: print usage, exit 0.
    Help,
    /// Decode and print every pin.
    Show,
    /// Run a command on one pin.
    Pin {
        pin: Pin,
        command: Command,
        value: Option<i64>,
    },
}

impl Invocation {
    /// Parse the arguments following the program name.
    ///
    /// Errors are checked in command line order: pin, command, value.
    pub fn parse<I, S>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let Some(first) = args.next() else {
            return Ok(Invocation::Usage);
        };
        match first.as_ref() {
            "show" => return Ok(Invocation::Show),
            "-h" | "--help" => return Ok(Invocation::Help),
            _ => {}
        }

        let pin: Pin = first.as_ref().parse()?;
        let command: Command = args.next().ok_or(Error::NoCommand)?.as_ref().parse()?;
        let value = match (command.takes_value(), args.next()) {
            (false, _) => None,
            (true, None) => return Err(Error::MissingValue),
            (true, Some(value)) => Some(parse_value(value.as_ref())?),
        };

        Ok(Invocation::Pin {
            pin,
            command,
            value,
        })
    }

    /// Run against `regs`, printing results to `out`.
    pub fn run<R, W>(&self, regs: &mut R, out: &mut W) -> Result<(), Error>
    where
        R: GpioRegisters + ?Sized,
        W: Write + ?Sized,
    {
        match *self {
            Invocation::Usage | Invocation::Help => out.write_all(USAGE.as_bytes())?,
            Invocation::Show => show_all(&*regs, out)?,
            Invocation::Pin {
                pin,
                command,
                value,
            } => command.execute(regs, pin, value, out)?,
        }
        out.flush()?;
        Ok(())
    }
}
