//! Codec for IP configuration records.
//!
//! A record ([`Config`]) is a versioned, ordered list of typed attributes. It has two
//! representations: a compact big-endian binary stream ("packed") and a line based
//! `key: value` text stream ("unpacked"). The version selects the [`Schema`] that decides
//! which type each key carries.

mod de;
pub mod endian;
mod error;
mod packed;
pub mod parse;
mod record;
pub mod schema;
mod ser;
mod unpacked;

pub use error::{Error, Result};
pub use record::{Attribute, AttributeValue, Config, Link, Route};
pub use schema::{AttributeType, Schema, SchemaEntry};
