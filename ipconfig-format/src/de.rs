use std::io::Read;

use byteorder::{NativeEndian, ReadBytesExt};

use crate::endian::{to_wire_u16, to_wire_u32};
use crate::{Error, Link, Result, Route};

/// Read a u16 in wire order
#[inline(always)]
pub(crate) fn read_u16<R: Read>(reader: &mut R, field: &'static str) -> Result<u16> {
    reader
        .read_u16::<NativeEndian>()
        .map(to_wire_u16)
        .map_err(Error::read(field))
}

/// Read a u32 in wire order
#[inline(always)]
pub(crate) fn read_u32<R: Read>(reader: &mut R, field: &'static str) -> Result<u32> {
    reader
        .read_u32::<NativeEndian>()
        .map(to_wire_u32)
        .map_err(Error::read(field))
}

/// Read a u16 length-prefixed string.
///
/// A zero length is a padding marker: the two bytes after it are skipped and the length
/// is read again. If the stream ends inside the payload, the bytes that were available
/// make up the string.
pub(crate) fn read_string<R: Read>(reader: &mut R, field: &'static str) -> Result<String> {
    let mut len = read_u16(reader, field)?;

    while len == 0 {
        reader
            .read_exact(&mut [0u8; 2])
            .map_err(Error::read(field))?;
        len = read_u16(reader, field)?;
    }

    let len = len as usize;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure(len))?;

    let read = reader
        .by_ref()
        .take(len as u64)
        .read_to_end(&mut buf)
        .map_err(Error::read(field))?;

    if read < len {
        tracing::warn!(field, expected = len, read, "string cut short by end of stream");
    }

    String::from_utf8(buf)
        .map_err(|e| Error::malformed(field, String::from_utf8_lossy(e.as_bytes())))
}

pub(crate) trait DeserializeOwned {
    fn deserialize_owned<R: Read>(reader: &mut R) -> Result<Self>
    where
        Self: Sized;
}

impl DeserializeOwned for Link {
    fn deserialize_owned<R: Read>(reader: &mut R) -> Result<Self> {
        let address = read_string(reader, "link address")?;
        let prefix = read_u32(reader, "link prefix")?;

        Ok(Link { address, prefix })
    }
}

impl DeserializeOwned for Route {
    fn deserialize_owned<R: Read>(reader: &mut R) -> Result<Self> {
        let destination = match read_u32(reader, "route destination flag")? {
            0 => None,
            _ => {
                let address = read_string(reader, "route destination address")?;
                let prefix = read_u32(reader, "route destination prefix")?;
                Some(Link { address, prefix })
            }
        };

        let next_hop = match read_u32(reader, "route next hop flag")? {
            0 => None,
            _ => Some(read_string(reader, "route next hop")?),
        };

        Ok(Route::new(destination, next_hop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_integers() {
        let mut cursor = Cursor::new(vec![0x01, 0x02, 0x0a, 0x00, 0x00, 0x01]);
        assert_eq!(read_u16(&mut cursor, "u16").unwrap(), 0x0102);
        assert_eq!(read_u32(&mut cursor, "u32").unwrap(), 0x0a00_0001);
    }

    #[test]
    fn short_integer_is_truncated() {
        let mut cursor = Cursor::new(vec![0x00, 0x00, 0x01]);
        assert!(matches!(
            read_u32(&mut cursor, "prefix"),
            Err(Error::Truncated("prefix"))
        ));

        let mut cursor = Cursor::new(vec![0x00]);
        assert!(matches!(
            read_u16(&mut cursor, "length"),
            Err(Error::Truncated("length"))
        ));
    }

    #[test]
    fn read_plain_string() {
        let mut cursor = Cursor::new(b"\x00\x03dnsrest".to_vec());
        assert_eq!(read_string(&mut cursor, "key").unwrap(), "dns");
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn padding_markers_are_skipped() {
        let mut cursor = Cursor::new(b"\x00\x00\xff\xff\x00\x03dns".to_vec());
        assert_eq!(read_string(&mut cursor, "key").unwrap(), "dns");

        let mut cursor = Cursor::new(b"\x00\x00\x00\x00\x00\x00\x12\x34\x00\x03dns".to_vec());
        assert_eq!(read_string(&mut cursor, "key").unwrap(), "dns");
    }

    #[test]
    fn padding_without_string_is_truncated() {
        let mut cursor = Cursor::new(b"\x00\x00\x00".to_vec());
        assert!(matches!(
            read_string(&mut cursor, "key"),
            Err(Error::Truncated("key"))
        ));

        let mut cursor = Cursor::new(b"\x00\x00\x00\x00".to_vec());
        assert!(matches!(
            read_string(&mut cursor, "key"),
            Err(Error::Truncated("key"))
        ));
    }

    #[test]
    fn string_cut_by_end_of_stream_is_short() {
        let mut cursor = Cursor::new(b"\x00\x08abc".to_vec());
        assert_eq!(read_string(&mut cursor, "value").unwrap(), "abc");
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let mut cursor = Cursor::new(b"\x00\x02\xc3\x28".to_vec());
        assert!(matches!(
            read_string(&mut cursor, "value"),
            Err(Error::MalformedField { field: "value", .. })
        ));
    }

    #[test]
    fn read_link() {
        let mut cursor = Cursor::new(b"\x00\x0b192.168.1.2\x00\x00\x00\x18".to_vec());
        let link = Link::deserialize_owned(&mut cursor).unwrap();
        assert_eq!(link, Link::new("192.168.1.2", 24));
    }

    #[test]
    fn read_route_flags() {
        let bytes = b"\x00\x00\x00\x01\x00\x0810.0.0.0\x00\x00\x00\x18\x00\x00\x00\x01\x00\x0810.0.0.1";
        let route = Route::deserialize_owned(&mut Cursor::new(bytes.to_vec())).unwrap();
        assert_eq!(
            route,
            Route::new(Some(Link::new("10.0.0.0", 24)), Some("10.0.0.1"))
        );

        let bytes = b"\x00\x00\x00\x00\x00\x00\x00\x01\x00\x070.0.0.0";
        let route = Route::deserialize_owned(&mut Cursor::new(bytes.to_vec())).unwrap();
        assert_eq!(route, Route::default_via("0.0.0.0"));

        let bytes = b"\x00\x00\x00\x00\x00\x00\x00\x00";
        let route = Route::deserialize_owned(&mut Cursor::new(bytes.to_vec())).unwrap();
        assert_eq!(route, Route::default());
    }

    #[test]
    fn zero_prefix_destination_reads_as_unset() {
        let bytes = b"\x00\x00\x00\x01\x00\x070.0.0.0\x00\x00\x00\x00\x00\x00\x00\x01\x00\x0810.0.0.1";
        let route = Route::deserialize_owned(&mut Cursor::new(bytes.to_vec())).unwrap();
        assert_eq!(route, Route::default_via("10.0.0.1"));
    }

    #[test]
    fn route_missing_next_hop_flag_is_truncated() {
        let bytes = b"\x00\x00\x00\x00\x00\x00";
        assert!(matches!(
            Route::deserialize_owned(&mut Cursor::new(bytes.to_vec())),
            Err(Error::Truncated("route next hop flag"))
        ));
    }
}
