//! Pin identifiers of the form `PC23`.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::layout::{PINS_PER_PORT, PORT_COUNT, port_base};

/// One of the seven GPIO ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PortId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
}

impl PortId {
    /// Every port, A to G.
    pub const ALL: [PortId; PORT_COUNT] = [
        PortId::A,
        PortId::B,
        PortId::C,
        PortId::D,
        PortId::E,
        PortId::F,
        PortId::G,
    ];

    /// Port for a letter `A`..=`G`, either case.
    pub fn from_letter(letter: char) -> Option<Self> {
        let index = (letter.to_ascii_uppercase() as u32).checked_sub('A' as u32)?;
        Self::ALL.get(index as usize).copied()
    }

    /// Zero-based port number, A = 0.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case port letter.
    pub const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Byte offset of this port's register block from the controller base.
    #[inline]
    pub const fn base(self) -> usize {
        port_base(self.index())
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single GPIO line: port plus bit offset 0-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pin {
    port: PortId,
    offset: u8,
}

impl Pin {
    /// Returns `None` when `offset` is not a valid bit position.
    pub const fn new(port: PortId, offset: u8) -> Option<Self> {
        if offset < PINS_PER_PORT {
            Some(Self { port, offset })
        } else {
            None
        }
    }

    #[inline]
    pub const fn port(self) -> PortId {
        self.port
    }

    #[inline]
    pub const fn offset(self) -> u8 {
        self.offset
    }

    /// Every pin of `port`, in bit order.
    pub fn all_of(port: PortId) -> impl Iterator<Item = Pin> {
        (0..PINS_PER_PORT).map(move |offset| Pin { port, offset })
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{:02}", self.port.letter(), self.offset)
    }
}

/// Accepts exactly `P`, a port letter and two decimal digits, e.g. `pa05`.
impl FromStr for Pin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::BadPin(s.to_owned());

        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes[0].eq_ignore_ascii_case(&b'P') {
            return Err(bad());
        }
        let port = PortId::from_letter(bytes[1] as char).ok_or_else(bad)?;
        if !bytes[2..].iter().all(u8::is_ascii_digit) {
            return Err(bad());
        }
        let offset = (bytes[2] - b'0') * 10 + (bytes[3] - b'0');

        Pin::new(port, offset).ok_or_else(bad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_pins() {
        let pin: Pin = "PC23".parse().unwrap();
        assert_eq!(pin.port(), PortId::C);
        assert_eq!(pin.offset(), 23);

        let pin: Pin = "pa00".parse().unwrap();
        assert_eq!((pin.port(), pin.offset()), (PortId::A, 0));

        let pin: Pin = "Pg31".parse().unwrap();
        assert_eq!((pin.port(), pin.offset()), (PortId::G, 31));
    }

    #[test]
    fn rejects_malformed() {
        for spec in ["", "PA5", "PA005", "PH00", "P@00", "PA32", "PA99", "PAx5", "PA-1", "PA 1", "XA01", "PÄ1"] {
            assert!(
                matches!(spec.parse::<Pin>(), Err(Error::BadPin(ref s)) if s == spec),
                "{spec:?} accepted"
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(Pin::new(PortId::A, 5).unwrap().to_string(), "PA05");
        assert_eq!(Pin::new(PortId::F, 17).unwrap().to_string(), "PF17");
        assert!(Pin::new(PortId::A, 32).is_none());
    }

    #[test]
    fn port_bases() {
        assert_eq!(PortId::A.base(), 0x000);
        assert_eq!(PortId::D.base(), 0x300);
        assert_eq!(PortId::G.base(), 0x600);
        assert_eq!(PortId::from_letter('e'), Some(PortId::E));
        assert_eq!(PortId::from_letter('H'), None);
        assert_eq!(PortId::from_letter('0'), None);
    }

    proptest! {
        #[test]
        fn valid_specs_parse(port in 0usize..7, offset in 0u8..32, lower in any::<bool>()) {
            let letter = PortId::ALL[port].letter();
            let letter = if lower { letter.to_ascii_lowercase() } else { letter };
            let pin: Pin = format!("P{letter}{offset:02}").parse().unwrap();
            prop_assert_eq!(pin.port().index(), port);
            prop_assert_eq!(pin.offset(), offset);
        }

        #[test]
        fn out_of_range_offsets_fail(port in 0usize..7, offset in 32u8..100) {
            let spec = format!("P{}{offset:02}", PortId::ALL[port].letter());
            prop_assert!(spec.parse::<Pin>().is_err());
        }

        #[test]
        fn unknown_ports_fail(letter in "[H-Zh-z]", offset in 0u8..32) {
            let spec = format!("P{letter}{offset:02}");
            prop_assert!(spec.parse::<Pin>().is_err());
        }

        #[test]
        fn wrong_length_fails(spec in ".{0,3}|.{5,8}") {
            prop_assume!(spec.len() != 4);
            prop_assert!(spec.parse::<Pin>().is_err());
        }
    }
}
