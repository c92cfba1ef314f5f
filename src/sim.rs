//! In-memory stand-in for the GPIO controller.
//!
//! Models what the tool relies on: set/clear registers update their plain
//! register, read-only registers ignore writes, and INL follows PAT0 for pins
//! configured as GPIO outputs. Other pins read the level set with
//! [`SimulatedRegisters::drive_input`].

use log::trace;

use crate::layout::{MIN_WINDOW, PORT_COUNT, PORT_STRIDE, Register, Signal};
use crate::low::register::GpioRegisters;
use crate::pin::{Pin, PortId};

const WORDS: usize = MIN_WINDOW / 4;

/// Register bank for all seven ports, held in memory.
#[derive(Debug, Clone)]
pub struct SimulatedRegisters {
    words: Vec<u32>,
    /// Externally driven input levels, one word per port.
    external: [u32; PORT_COUNT],
}

impl Default for SimulatedRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedRegisters {
    /// All registers zero: every pin in function 0, nothing driven.
    pub fn new() -> Self {
        Self {
            words: vec![0; WORDS],
            external: [0; PORT_COUNT],
        }
    }

    fn word(&self, port: PortId, reg: Register) -> u32 {
        self.words[(port.base() + reg.offset()) / 4]
    }

    fn word_mut(&mut self, port: PortId, reg: Register) -> &mut u32 {
        &mut self.words[(port.base() + reg.offset()) / 4]
    }

    /// Store `value` directly into `reg` of `port`, bypassing write rules.
    pub fn poke(&mut self, port: PortId, reg: Register, value: u32) {
        *self.word_mut(port, reg) = value;
    }

    /// Raw content of `reg` of `port`.
    pub fn peek(&self, port: PortId, reg: Register) -> u32 {
        self.word(port, reg)
    }

    /// Set the level an external device drives onto `pin`.
    pub fn drive_input(&mut self, pin: Pin, level: bool) {
        let word = &mut self.external[pin.port().index()];
        if level {
            *word |= 1 << pin.offset();
        } else {
            *word &= !(1 << pin.offset());
        }
    }

    /// Latch the interrupt flag of `pin`.
    pub fn raise_flag(&mut self, pin: Pin) {
        *self.word_mut(pin.port(), Register::Flg) |= 1 << pin.offset();
    }

    fn input_level(&self, port: PortId) -> u32 {
        let outputs = !self.word(port, Register::Int)
            & self.word(port, Register::Msk)
            & !self.word(port, Register::Pat1);
        (self.external[port.index()] & !outputs) | (self.word(port, Register::Pat0) & outputs)
    }

    fn locate(offset: usize) -> (PortId, Option<Register>) {
        let port = PortId::ALL[offset / PORT_STRIDE];
        (port, Register::at(offset % PORT_STRIDE))
    }
}

impl GpioRegisters for SimulatedRegisters {
    fn read_register(&self, offset: usize) -> u32 {
        match Self::locate(offset) {
            (port, Some(Register::Inl)) => self.input_level(port),
            _ => self.words[offset / 4],
        }
    }

    fn write_register(&mut self, offset: usize, value: u32) {
        let (port, reg) = Self::locate(offset);
        let Some(reg) = reg else {
            trace!("write to reserved offset {offset:#x} dropped");
            return;
        };

        if reg.is_read_only() {
            return;
        }
        match (reg, Signal::for_write(reg)) {
            (_, Some((signal, true))) => *self.word_mut(port, signal.plain()) |= value,
            (_, Some((signal, false))) => *self.word_mut(port, signal.plain()) &= !value,
            (Register::Flgc, None) => *self.word_mut(port, Register::Flg) &= !value,
            (reg, None) => *self.word_mut(port, reg) = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pa(offset: u8) -> Pin {
        Pin::new(PortId::A, offset).unwrap()
    }

    #[test]
    fn set_and_clear_registers() {
        let mut regs = SimulatedRegisters::new();
        let base = PortId::C.base();

        regs.write_register(base + Register::Pat0s.offset(), 0b1010);
        assert_eq!(regs.peek(PortId::C, Register::Pat0), 0b1010);
        regs.write_register(base + Register::Pat0s.offset(), 0b0100);
        assert_eq!(regs.peek(PortId::C, Register::Pat0), 0b1110);
        regs.write_register(base + Register::Pat0c.offset(), 0b0010);
        assert_eq!(regs.peek(PortId::C, Register::Pat0), 0b1100);

        // Other ports untouched
        assert_eq!(regs.peek(PortId::B, Register::Pat0), 0);
        assert_eq!(regs.peek(PortId::D, Register::Pat0), 0);
    }

    #[test]
    fn read_only_registers_ignore_writes() {
        let mut regs = SimulatedRegisters::new();
        regs.write_register(Register::Inl.offset(), u32::MAX);
        regs.write_register(Register::Flg.offset(), u32::MAX);
        assert_eq!(regs.read_register(Register::Inl.offset()), 0);
        assert_eq!(regs.read_register(Register::Flg.offset()), 0);
    }

    #[test]
    fn flag_clear() {
        let mut regs = SimulatedRegisters::new();
        regs.raise_flag(pa(3));
        regs.raise_flag(pa(4));
        regs.write_register(Register::Flgc.offset(), 1 << 3);
        assert_eq!(regs.peek(PortId::A, Register::Flg), 1 << 4);
    }

    #[test]
    fn input_loopback() {
        let mut regs = SimulatedRegisters::new();
        regs.drive_input(pa(1), true);
        assert_eq!(regs.read_register(Register::Inl.offset()), 0b10);

        // PA02 as GPIO output driving high
        regs.poke(PortId::A, Register::Msk, 1 << 2);
        regs.poke(PortId::A, Register::Pat0, 1 << 2);
        assert_eq!(regs.read_register(Register::Inl.offset()), 0b110);

        // Switched to input, the driven level no longer loops back
        regs.poke(PortId::A, Register::Pat1, 1 << 2);
        assert_eq!(regs.read_register(Register::Inl.offset()), 0b10);
    }
}
