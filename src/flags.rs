use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Bitset selecting what goes into the header written before every line.
///
/// The header is laid out as `date time.micros file:line: `; each part is switched on by its
/// flag. When both `LONG_FILE` and `SHORT_FILE` are set, `SHORT_FILE` wins.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// No header at all.
    pub const NONE: Flags = Flags(0);
    /// The date in the local time zone: `2009/01/23`.
    pub const DATE: Flags = Flags(1 << 0);
    /// The time in the local time zone: `01:23:23`.
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full path of the calling file and the line number: `/a/b/c/d.rs:23`.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Initial values for the default logger.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Flags, &str); 6] = [
            (Flags::DATE, "DATE"),
            (Flags::TIME, "TIME"),
            (Flags::MICROSECONDS, "MICROSECONDS"),
            (Flags::LONG_FILE, "LONG_FILE"),
            (Flags::SHORT_FILE, "SHORT_FILE"),
            (Flags::UTC, "UTC"),
        ];

        if self.is_empty() {
            return f.write_str("Flags(NONE)");
        }

        f.write_str("Flags(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        let unknown = self.0 & !0b11_1111;
        if unknown != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{:#x}", unknown)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_is_date_and_time() {
        assert_eq!(Flags::STD, Flags::DATE | Flags::TIME);
        assert_eq!(Flags::STD.bits(), 3);
    }

    #[test]
    fn combine_and_query() {
        let mut flags = Flags::SHORT_FILE;
        flags |= Flags::STD;

        assert!(flags.contains(Flags::DATE));
        assert!(flags.contains(Flags::SHORT_FILE | Flags::TIME));
        assert!(!flags.contains(Flags::UTC));
        assert!(flags.intersects(Flags::UTC | Flags::DATE));
        assert!(Flags::NONE.is_empty());
    }

    #[test]
    fn debug_lists_names() {
        assert_eq!(format!("{:?}", Flags::NONE), "Flags(NONE)");
        assert_eq!(format!("{:?}", Flags::SHORT_FILE | Flags::STD), "Flags(DATE | TIME | SHORT_FILE)");
        assert_eq!(format!("{:?}", Flags::from_bits(0x41)), "Flags(DATE | 0x40)");
    }
}
