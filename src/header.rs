use core::fmt::{self, Write};
use core::panic::Location;

use chrono::{Local, NaiveDateTime, Utc};

use crate::flags::Flags;

const TIMESTAMP: Flags = Flags::from_bits(
    Flags::DATE.bits() | Flags::TIME.bits() | Flags::MICROSECONDS.bits()
);
const CALLER: Flags = Flags::from_bits(Flags::LONG_FILE.bits() | Flags::SHORT_FILE.bits());

/// Writes the header selected by `flags` for a call made at `location`.
///
/// The clock is only read when one of the timestamp flags is set.
pub(crate) fn write_header(
    buf: &mut String, flags: Flags, location: &Location<'_>
) -> fmt::Result {
    let time = flags.intersects(TIMESTAMP).then(|| now(flags));
    format_header(buf, flags, time, location.file(), location.line())
}

fn now(flags: Flags) -> NaiveDateTime {
    if flags.contains(Flags::UTC) {
        Utc::now().naive_utc()
    } else {
        Local::now().naive_local()
    }
}

pub(crate) fn format_header(
    buf: &mut String, flags: Flags, time: Option<NaiveDateTime>, file: &str, line: u32
) -> fmt::Result {
    if let Some(time) = time {
        if flags.contains(Flags::DATE) {
            write!(buf, "{}", time.format("%Y/%m/%d "))?;
        }
        if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            write!(buf, "{}", time.format("%H:%M:%S"))?;
            if flags.contains(Flags::MICROSECONDS) {
                write!(buf, "{}", time.format("%.6f"))?;
            }
            buf.push(' ');
        }
    }

    if flags.intersects(CALLER) {
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(file)
        } else {
            file
        };
        write!(buf, "{}:{}: ", file, line)?;
    }

    Ok(())
}

#[inline]
fn short_file(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2009, 11, 10)
            .unwrap()
            .and_hms_micro_opt(23, 4, 5, 123)
            .unwrap()
    }

    fn header(flags: Flags) -> String {
        let mut buf = String::new();
        format_header(&mut buf, flags, Some(fixed_time()), "src/nested/thing.rs", 42).unwrap();
        buf
    }

    #[test]
    fn no_flags_no_header() {
        assert_eq!(header(Flags::NONE), "");
        assert_eq!(header(Flags::UTC), "");
    }

    #[test]
    fn date_and_time() {
        assert_eq!(header(Flags::DATE), "2009/11/10 ");
        assert_eq!(header(Flags::TIME), "23:04:05 ");
        assert_eq!(header(Flags::STD), "2009/11/10 23:04:05 ");
    }

    #[test]
    fn microseconds_imply_time() {
        assert_eq!(header(Flags::MICROSECONDS), "23:04:05.000123 ");
        assert_eq!(header(Flags::STD | Flags::MICROSECONDS), "2009/11/10 23:04:05.000123 ");
    }

    #[test]
    fn caller_location() {
        assert_eq!(header(Flags::LONG_FILE), "src/nested/thing.rs:42: ");
        assert_eq!(header(Flags::SHORT_FILE), "thing.rs:42: ");
        assert_eq!(header(Flags::LONG_FILE | Flags::SHORT_FILE), "thing.rs:42: ");
        assert_eq!(header(Flags::STD | Flags::SHORT_FILE), "2009/11/10 23:04:05 thing.rs:42: ");
    }

    #[test]
    fn short_file_names() {
        assert_eq!(short_file("a/b/c.rs"), "c.rs");
        assert_eq!(short_file("c.rs"), "c.rs");
        assert_eq!(short_file(r"a\b\c.rs"), "c.rs");
    }

    #[test]
    fn live_header() {
        let mut buf = String::new();
        write_header(&mut buf, Flags::SHORT_FILE, Location::caller()).unwrap();
        assert!(buf.starts_with("header.rs:"));
        assert!(buf.ends_with(": "));

        let mut buf = String::new();
        write_header(&mut buf, Flags::DATE | Flags::UTC, Location::caller()).unwrap();
        assert_eq!(buf.len(), "2009/11/10 ".len());
    }

    #[test]
    fn utc_flag_uses_utc_clock() {
        // Sample the clock on both sides in case the call straddles a boundary.
        let before = Utc::now().format("%Y/%m/%d %H:%M").to_string();
        let mut buf = String::new();
        write_header(&mut buf, Flags::STD | Flags::UTC, Location::caller()).unwrap();
        let after = Utc::now().format("%Y/%m/%d %H:%M").to_string();

        let minute = &buf[..before.len()];
        assert!(minute == before || minute == after, "{} not in [{}, {}]", buf, before, after);
        assert_eq!(buf.len(), "2009/11/10 23:04:05 ".len());

        let before = Local::now().format("%Y/%m/%d %H:%M").to_string();
        let mut buf = String::new();
        write_header(&mut buf, Flags::STD, Location::caller()).unwrap();
        let after = Local::now().format("%Y/%m/%d %H:%M").to_string();

        let minute = &buf[..before.len()];
        assert!(minute == before || minute == after, "{} not in [{}, {}]", buf, before, after);
    }
}
