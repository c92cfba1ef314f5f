//! Register model of the Ingenic GPIO controller.
//!
//! Every port owns an identical block of 32-bit registers. The block is
//! described once, in hardware order, by [`LAYOUT`]; register offsets are
//! derived from that table at compile time so reserved words can never be
//! dropped without shifting everything that follows them.

/// Physical base address of the GPIO controller.
pub const GPIO_BASE: u64 = 0x1001_0000;

/// Byte stride between two consecutive ports.
pub const PORT_STRIDE: usize = 0x100;

/// Number of ports (A to G).
pub const PORT_COUNT: usize = 7;

/// Number of pins per port.
pub const PINS_PER_PORT: u8 = 32;

/// Smallest register window that covers every port.
pub const MIN_WINDOW: usize = PORT_COUNT * PORT_STRIDE;

/// Named registers of one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Input level, read-only.
    Inl,
    Int,
    Ints,
    Intc,
    Msk,
    Msks,
    Mskc,
    Pat1,
    Pat1s,
    Pat1c,
    Pat0,
    Pat0s,
    Pat0c,
    /// Interrupt flag, read-only.
    Flg,
    Flgc,
    Pen,
    Pens,
    Penc,
    Gid2ld,
}

/// One entry of the per-port register block.
#[derive(Debug, Clone, Copy)]
pub enum Slot {
    /// A named 32-bit register.
    Reg(Register),
    /// A run of reserved 32-bit words.
    Reserved(usize),
}

/// Register block of a port, in address order, as given by the datasheet.
pub const LAYOUT: [Slot; 27] = [
    Slot::Reg(Register::Inl),
    Slot::Reserved(3),
    Slot::Reg(Register::Int),
    Slot::Reg(Register::Ints),
    Slot::Reg(Register::Intc),
    Slot::Reserved(1),
    Slot::Reg(Register::Msk),
    Slot::Reg(Register::Msks),
    Slot::Reg(Register::Mskc),
    Slot::Reserved(1),
    Slot::Reg(Register::Pat1),
    Slot::Reg(Register::Pat1s),
    Slot::Reg(Register::Pat1c),
    Slot::Reserved(1),
    Slot::Reg(Register::Pat0),
    Slot::Reg(Register::Pat0s),
    Slot::Reg(Register::Pat0c),
    Slot::Reserved(1),
    Slot::Reg(Register::Flg),
    Slot::Reserved(1),
    Slot::Reg(Register::Flgc),
    Slot::Reserved(5),
    Slot::Reg(Register::Pen),
    Slot::Reg(Register::Pens),
    Slot::Reg(Register::Penc),
    Slot::Reserved(29),
    Slot::Reg(Register::Gid2ld),
];

const REGISTER_COUNT: usize = Register::ALL.len();

const OFFSETS: [usize; REGISTER_COUNT] = compute_offsets();

const fn compute_offsets() -> [usize; REGISTER_COUNT] {
    let mut offsets = [0; REGISTER_COUNT];
    let mut cursor = 0;
    let mut i = 0;
    while i < LAYOUT.len() {
        match LAYOUT[i] {
            Slot::Reg(reg) => {
                offsets[reg as usize] = cursor;
                cursor += 4;
            }
            Slot::Reserved(words) => cursor += words * 4,
        }
        i += 1;
    }
    assert!(cursor <= PORT_STRIDE);
    offsets
}

impl Register {
    /// All registers, in discriminant order.
    pub const ALL: [Register; 19] = [
        Register::Inl,
        Register::Int,
        Register::Ints,
        Register::Intc,
        Register::Msk,
        Register::Msks,
        Register::Mskc,
        Register::Pat1,
        Register::Pat1s,
        Register::Pat1c,
        Register::Pat0,
        Register::Pat0s,
        Register::Pat0c,
        Register::Flg,
        Register::Flgc,
        Register::Pen,
        Register::Pens,
        Register::Penc,
        Register::Gid2ld,
    ];

    /// Byte offset of the register inside its port block.
    pub const fn offset(self) -> usize {
        OFFSETS[self as usize]
    }

    /// Register found at `offset` inside a port block, if any.
    pub fn at(offset: usize) -> Option<Register> {
        Register::ALL.into_iter().find(|reg| reg.offset() == offset)
    }

    /// Datasheet mnemonic.
    pub const fn name(self) -> &'static str {
        match self {
            Register::Inl => "INL",
            Register::Int => "INT",
            Register::Ints => "INTS",
            Register::Intc => "INTC",
            Register::Msk => "MSK",
            Register::Msks => "MSKS",
            Register::Mskc => "MSKC",
            Register::Pat1 => "PAT1",
            Register::Pat1s => "PAT1S",
            Register::Pat1c => "PAT1C",
            Register::Pat0 => "PAT0",
            Register::Pat0s => "PAT0S",
            Register::Pat0c => "PAT0C",
            Register::Flg => "FLG",
            Register::Flgc => "FLGC",
            Register::Pen => "PEN",
            Register::Pens => "PENS",
            Register::Penc => "PENC",
            Register::Gid2ld => "GID2LD",
        }
    }

    /// Whether software writes to this register have any effect.
    pub const fn is_read_only(self) -> bool {
        matches!(self, Register::Inl | Register::Flg)
    }
}

/// A writable per-pin control signal, backed by a plain/set/clear register
/// triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Interrupt enable.
    Int,
    /// Interrupt mask, doubles as the GPIO/function selector.
    Msk,
    /// Pattern 1: direction for GPIO, trigger type for interrupts.
    Pat1,
    /// Pattern 0: output data for GPIO, trigger polarity for interrupts.
    Pat0,
    /// Pull enable.
    Pen,
}

impl Signal {
    /// Register holding the current state.
    pub const fn plain(self) -> Register {
        match self {
            Signal::Int => Register::Int,
            Signal::Msk => Register::Msk,
            Signal::Pat1 => Register::Pat1,
            Signal::Pat0 => Register::Pat0,
            Signal::Pen => Register::Pen,
        }
    }

    /// Register where a written 1 sets the bit.
    pub const fn set(self) -> Register {
        match self {
            Signal::Int => Register::Ints,
            Signal::Msk => Register::Msks,
            Signal::Pat1 => Register::Pat1s,
            Signal::Pat0 => Register::Pat0s,
            Signal::Pen => Register::Pens,
        }
    }

    /// Register where a written 1 clears the bit.
    pub const fn clear(self) -> Register {
        match self {
            Signal::Int => Register::Intc,
            Signal::Msk => Register::Mskc,
            Signal::Pat1 => Register::Pat1c,
            Signal::Pat0 => Register::Pat0c,
            Signal::Pen => Register::Penc,
        }
    }

    /// Signal whose set or clear register is `reg`, with `true` for set.
    pub fn for_write(reg: Register) -> Option<(Signal, bool)> {
        [Signal::Int, Signal::Msk, Signal::Pat1, Signal::Pat0, Signal::Pen]
            .into_iter()
            .find_map(|signal| {
                if signal.set() == reg {
                    Some((signal, true))
                } else if signal.clear() == reg {
                    Some((signal, false))
                } else {
                    None
                }
            })
    }
}

/// Byte offset of port `index` from the controller base.
pub const fn port_base(index: usize) -> usize {
    index * PORT_STRIDE
}
