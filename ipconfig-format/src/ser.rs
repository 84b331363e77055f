use std::io::Write;

use byteorder::{NativeEndian, WriteBytesExt};

use crate::endian::{to_wire_u16, to_wire_u32};
use crate::{Error, Link, Result, Route};

/// Write a u16 in wire order
#[inline(always)]
pub(crate) fn write_u16<W: Write>(writer: &mut W, value: u16, field: &'static str) -> Result<()> {
    writer
        .write_u16::<NativeEndian>(to_wire_u16(value))
        .map_err(Error::write(field))
}

/// Write a u32 in wire order
#[inline(always)]
pub(crate) fn write_u32<W: Write>(writer: &mut W, value: u32, field: &'static str) -> Result<()> {
    writer
        .write_u32::<NativeEndian>(to_wire_u32(value))
        .map_err(Error::write(field))
}

/// Write a u16 length-prefixed string, without a terminator.
///
/// The length prefix cannot describe more than `u16::MAX` bytes, so longer strings are
/// cut. An empty string is written as a zero length, which readers take as padding.
pub(crate) fn write_string<W: Write>(writer: &mut W, value: &str, field: &'static str) -> Result<()> {
    let bytes = value.as_bytes();

    let bytes = if bytes.len() > u16::MAX as usize {
        tracing::warn!(field, len = bytes.len(), "string too long, truncating");
        &bytes[..u16::MAX as usize]
    } else {
        bytes
    };

    if bytes.is_empty() {
        tracing::warn!(field, "writing empty string, readers will treat it as padding");
    }

    write_u16(writer, bytes.len() as u16, field)?;
    writer.write_all(bytes).map_err(Error::write(field))
}

pub(crate) trait Serialize {
    fn write<W: Write>(&self, writer: &mut W) -> Result<()>;
}

impl Serialize for Link {
    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(writer, &self.address, "link address")?;
        write_u32(writer, self.prefix, "link prefix")
    }
}

impl Serialize for Route {
    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self.destination() {
            Some(destination) => {
                write_u32(writer, 1, "route destination flag")?;
                write_string(writer, &destination.address, "route destination address")?;
                write_u32(writer, destination.prefix, "route destination prefix")?;
            }
            None => write_u32(writer, 0, "route destination flag")?,
        }

        match self.next_hop() {
            Some(next_hop) => {
                write_u32(writer, 1, "route next hop flag")?;
                write_string(writer, next_hop, "route next hop")
            }
            None => write_u32(writer, 0, "route next hop flag"),
        }
    }
}
