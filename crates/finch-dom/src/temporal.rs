//! Temporal Value Grammar
//!
//! Strict `HH:MM[:SS]` parsing for time-kind inputs. Values outside the
//! grammar are treated as absent for property reads while the raw attribute
//! string stays retrievable.

/// Check a string against the strict `HH:MM[:SS]` time grammar
///
/// Fields are exactly two digits; hour < 24, minute and second < 60.
pub fn is_valid_time(s: &str) -> bool {
    parse_time(s).is_some()
}

/// Parse into `(hour, minute, second)`, `second` defaulting to zero
pub fn parse_time(s: &str) -> Option<(u8, u8, u8)> {
    let b = s.as_bytes();
    let sec = match b.len() {
        5 => 0,
        8 => {
            if b[5] != b':' {
                return None;
            }
            two_digits(b[6], b[7]).filter(|&v| v < 60)?
        }
        _ => return None,
    };
    if b[2] != b':' {
        return None;
    }
    let hour = two_digits(b[0], b[1]).filter(|&v| v < 24)?;
    let minute = two_digits(b[3], b[4]).filter(|&v| v < 60)?;
    Some((hour, minute, sec))
}

fn two_digits(hi: u8, lo: u8) -> Option<u8> {
    if !hi.is_ascii_digit() || !lo.is_ascii_digit() {
        return None;
    }
    Some((hi - b'0') * 10 + (lo - b'0'))
}
