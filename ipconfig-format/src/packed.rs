use std::io::{BufRead, ErrorKind, Write};

use crate::de::{read_string, read_u32, DeserializeOwned};
use crate::schema::{self, AttributeType, SUPPORTED_VERSIONS, TERMINAL_KEY};
use crate::ser::{write_string, write_u32, Serialize};
use crate::{Attribute, AttributeValue, Config, Error, Link, Result, Route};

fn at_end<R: BufRead>(reader: &mut R) -> Result<bool> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => return Ok(buf.is_empty()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::ReadFailed(e, "attribute key")),
        }
    }
}

impl Config {
    /// Reads a packed record.
    ///
    /// Reading stops after the terminal key. A stream that ends cleanly between two
    /// attributes yields the attributes read so far, without a terminal attribute.
    pub fn read_packed<R: BufRead>(reader: &mut R) -> Result<Config> {
        let version = read_u32(reader, "file version")?;

        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(Error::UnsupportedVersion(version));
        }

        tracing::debug!(version, "reading packed config");

        let mut config = Config::new(version);

        while !at_end(reader)? {
            let key = read_string(reader, "attribute key")?;
            let ty = schema::resolve_type(version, &key)
                .ok_or_else(|| Error::UnknownKey {
                    key: key.clone(),
                    version,
                })?;

            let value = match ty {
                AttributeType::Terminal => AttributeValue::Terminal,
                AttributeType::Integer => AttributeValue::Integer(read_u32(reader, "integer")?),
                AttributeType::String => AttributeValue::String(read_string(reader, "string")?),
                AttributeType::Link => AttributeValue::Link(Link::deserialize_owned(reader)?),
                AttributeType::Route => AttributeValue::Route(Route::deserialize_owned(reader)?),
            };

            tracing::debug!(%key, %ty, "deserialized attribute");
            config.push(Attribute { key, value });

            if ty == AttributeType::Terminal {
                return Ok(config);
            }
        }

        tracing::debug!(
            attributes = config.attributes.len(),
            "stream ended without terminal key"
        );

        Ok(config)
    }

    /// Writes a packed record. Attributes after the first terminal one are not written,
    /// and a terminal key is appended if the record has none.
    pub fn write_packed<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u32(writer, self.version, "file version")?;

        for attribute in self.attributes.iter() {
            attribute.write(writer)?;

            if attribute.is_terminal() {
                return Ok(());
            }
        }

        write_string(writer, TERMINAL_KEY, "terminal key")
    }
}

impl Serialize for Attribute {
    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(writer, &self.key, "attribute key")?;

        match &self.value {
            AttributeValue::Terminal => Ok(()),
            AttributeValue::Integer(value) => write_u32(writer, *value, "integer"),
            AttributeValue::String(value) => write_string(writer, value, "string"),
            AttributeValue::Link(link) => link.write(writer),
            AttributeValue::Route(route) => route.write(writer),
        }
    }
}
