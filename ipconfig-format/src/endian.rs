//! Host to wire byte order conversion.
//!
//! The wire order is big-endian. Both conversions are their own inverse, so the same
//! function is used when reading and when writing: the stream codecs move integers in
//! host order and pass them through these.

#[inline(always)]
pub const fn to_wire_u16(value: u16) -> u16 {
    value.to_be()
}

#[inline(always)]
pub const fn to_wire_u32(value: u32) -> u32 {
    value.to_be()
}
