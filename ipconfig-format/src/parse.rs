//! Token level parsing for the unpacked text format.

use std::io::{BufRead, ErrorKind};
use std::str::FromStr;

use crate::{Error, Link, Result, Route};

/// Longest line kept by [`read_line`], one standard I/O buffer.
pub const LINE_CAPACITY: usize = 8192;

/// Reads up to the next newline, returning the line and whether the stream ended.
///
/// The newline is not part of the line. Lines longer than [`LINE_CAPACITY`] are cut and
/// the rest of that line is discarded.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<(String, bool)> {
    let mut line = Vec::new();
    let mut dropped = 0usize;

    let at_end = loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::ReadFailed(e, "line")),
        };

        if available.is_empty() {
            break true;
        }

        let (chunk, found) = match available.iter().position(|&b| b == b'\n') {
            Some(index) => (&available[..index], true),
            None => (available, false),
        };

        let room = LINE_CAPACITY - line.len();
        let keep = chunk.len().min(room);
        line.extend_from_slice(&chunk[..keep]);
        dropped += chunk.len() - keep;

        let used = chunk.len() + found as usize;
        reader.consume(used);

        if found {
            break false;
        }
    };

    if dropped > 0 {
        tracing::warn!(dropped, capacity = LINE_CAPACITY, "line too long, truncating");
    }

    let line = String::from_utf8(line)
        .map_err(|e| Error::malformed("line", String::from_utf8_lossy(e.as_bytes())))?;

    Ok((line, at_end))
}

/// Splits `key: value` on the first colon. Leading whitespace of the value is dropped.
pub fn parse_pair(line: &str) -> Result<(&str, &str)> {
    let (key, value) = line
        .split_once(':')
        .ok_or_else(|| Error::malformed("pair", line))?;

    Ok((key, value.trim_start()))
}

/// Parses a decimal integer the way `strtoul` does, then reduces it modulo `u32::MAX`.
///
/// Leading whitespace and one `+` or `-` sign are accepted, and a negative value wraps
/// around in 64 bits. Empty text is zero. Anything left after the digits is an error, and
/// so is non-empty text without digits. Values that overflow 64 bits saturate, so
/// `"4294967295"` and `"-1"` both parse as zero.
pub fn parse_u32(text: &str) -> Result<u32> {
    let trimmed = text
        .trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'));

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or_else(|| unsigned.len());
    let (digits, rest) = unsigned.split_at(end);

    // Without digits nothing is consumed, so all of `text` is left over.
    if digits.is_empty() {
        if text.is_empty() {
            return Ok(0);
        }

        return Err(Error::malformed("integer", text));
    }

    if !rest.is_empty() {
        return Err(Error::malformed("integer", text));
    }

    let value = digits
        .bytes()
        .try_fold(0u64, |acc, b| acc.checked_mul(10)?.checked_add(u64::from(b - b'0')));

    let value = match value {
        Some(value) if negative => value.wrapping_neg(),
        Some(value) => value,
        None => u64::MAX,
    };

    Ok((value % u64::from(u32::MAX)) as u32)
}

impl FromStr for Link {
    type Err = Error;

    fn from_str(s: &str) -> Result<Link> {
        let (address, prefix) = s
            .split_once('/')
            .ok_or_else(|| Error::malformed("link", s))?;

        Ok(Link {
            address: address.to_string(),
            prefix: parse_u32(prefix)?,
        })
    }
}

/// `address/prefix nextHop`, or `nextHop` alone. An empty next hop is no next hop, so
/// `address/prefix ` is a route with only a destination.
impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Route> {
        let (destination, next_hop) = match s.split_once(' ') {
            Some((destination, next_hop)) => (Some(destination.parse::<Link>()?), next_hop),
            None => (None, s),
        };

        let next_hop = Some(next_hop).filter(|next_hop| !next_hop.is_empty());

        Ok(Route::new(destination, next_hop))
    }
}
