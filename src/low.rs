//! Low-level register access used by the command and show layers.
//!
//! A register bank is anything implementing [`register::GpioRegisters`]: the
//! mapped `/dev/mem` window in production, an in-memory bank in tests. The
//! [`io`] handles sit on top of it and turn (port, register, bit) triples
//! into single 32-bit accesses.
//!
//! Bits are only ever changed through the set/clear register of a signal,
//! never by read-modify-write of the plain register. The hardware updates
//! some bits on its own (input levels, interrupt flags), and a full-register
//! write-back could undo such an update.

/// Register-level trait a GPIO controller window must provide.
pub mod register {
    /// Raw 32-bit access to the controller window.
    ///
    /// Offsets are byte offsets from the controller base and always
    /// 4-byte aligned. Implementations must perform each call as exactly one
    /// access; no caching, no merging.
    pub trait GpioRegisters {
        /// Read the register at `offset`.
        fn read_register(&self, offset: usize) -> u32;

        /// Write `value` to the register at `offset`.
        fn write_register(&mut self, offset: usize, value: u32);
    }
}

/// Port-relative handles over a register bank.
pub mod io {
    use log::{debug, trace};

    use super::register::GpioRegisters;
    use crate::layout::{Register, Signal};
    use crate::pin::PortId;

    #[inline]
    fn mask(bit: u8) -> u32 {
        debug_assert!(bit < 32);
        1 << bit
    }

    fn read<R: GpioRegisters + ?Sized>(regs: &R, port: PortId, reg: Register) -> u32 {
        let value = regs.read_register(port.base() + reg.offset());
        trace!("read P{port}.{} = {value:#010x}", reg.name());
        value
    }

    /// Read-only view of one port.
    pub struct PortView<'a, R: GpioRegisters + ?Sized> {
        regs: &'a R,
        port: PortId,
    }

    impl<'a, R> PortView<'a, R>
    where
        R: GpioRegisters + ?Sized,
    {
        /// View of `port` of `regs`.
        pub fn new(regs: &'a R, port: PortId) -> Self {
            Self { regs, port }
        }

        #[inline]
        pub fn port(&self) -> PortId {
            self.port
        }

        /// Read a whole register of this port.
        pub fn read(&self, reg: Register) -> u32 {
            read(self.regs, self.port, reg)
        }

        /// Read bit `bit` of `reg`.
        pub fn get_bit(&self, reg: Register, bit: u8) -> bool {
            self.read(reg) & mask(bit) != 0
        }

        /// Live input level of pin `bit`.
        pub fn input_level(&self, bit: u8) -> bool {
            self.get_bit(Register::Inl, bit)
        }

        /// Latched interrupt flag of pin `bit`.
        pub fn flag(&self, bit: u8) -> bool {
            self.get_bit(Register::Flg, bit)
        }
    }

    /// Mutable handle on one port.
    pub struct Port<'a, R: GpioRegisters + ?Sized> {
        regs: &'a mut R,
        port: PortId,
    }

    impl<'a, R> Port<'a, R>
    where
        R: GpioRegisters + ?Sized,
    {
        /// Handle on `port` of `regs`.
        pub fn new(regs: &'a mut R, port: PortId) -> Self {
            Self { regs, port }
        }

        /// Borrow a read-only view of the same port.
        pub fn view(&self) -> PortView<'_, R> {
            PortView::new(&*self.regs, self.port)
        }

        /// Bit-level handle on `signal`.
        pub fn signal(&mut self, signal: Signal) -> BitRegister<'_, R> {
            BitRegister {
                regs: &mut *self.regs,
                port: self.port,
                signal,
            }
        }
    }

    /// One signal of one port, driven through its set/clear register pair.
    pub struct BitRegister<'a, R: GpioRegisters + ?Sized> {
        regs: &'a mut R,
        port: PortId,
        signal: Signal,
    }

    impl<'a, R> BitRegister<'a, R>
    where
        R: GpioRegisters + ?Sized,
    {
        fn strobe(&mut self, reg: Register, bit: u8) {
            debug!("write P{}.{} <- bit {bit}", self.port, reg.name());
            self.regs
                .write_register(self.port.base() + reg.offset(), mask(bit));
        }

        /// Force `bit` to 1.
        pub fn set_bit(&mut self, bit: u8) {
            self.strobe(self.signal.set(), bit);
        }

        /// Force `bit` to 0.
        pub fn clear_bit(&mut self, bit: u8) {
            self.strobe(self.signal.clear(), bit);
        }

        /// Force `bit` to `value`.
        pub fn write_bit(&mut self, bit: u8, value: bool) {
            if value {
                self.set_bit(bit);
            } else {
                self.clear_bit(bit);
            }
        }

        /// Current state of `bit`.
        pub fn get_bit(&self, bit: u8) -> bool {
            read(&*self.regs, self.port, self.signal.plain()) & mask(bit) != 0
        }
    }

}
