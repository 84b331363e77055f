use std::io::{BufRead, Write};

use crate::parse::{parse_pair, parse_u32, read_line};
use crate::schema::{self, AttributeType, SUPPORTED_VERSIONS};
use crate::{Attribute, AttributeValue, Config, Error, Result};

impl Config {
    /// Reads `key: value` lines as a record of the given `version`.
    ///
    /// Blank lines are skipped. End of stream after a blank line, or a line with the
    /// terminal key, appends the terminal attribute and stops.
    pub fn read_unpacked<R: BufRead>(reader: &mut R, version: u32) -> Result<Config> {
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(Error::UnsupportedVersion(version));
        }

        tracing::debug!(version, "reading unpacked config");

        let mut config = Config::new(version);

        loop {
            let (line, at_end) = read_line(reader)?;

            if line.is_empty() {
                if at_end {
                    config.push(Attribute::terminal());
                    break;
                }

                continue;
            }

            let (key, value) = parse_pair(&line)?;
            let ty = schema::resolve_type(version, key).ok_or_else(|| Error::UnknownKey {
                key: key.to_string(),
                version,
            })?;

            let value = match ty {
                AttributeType::Terminal => AttributeValue::Terminal,
                AttributeType::Integer => AttributeValue::Integer(parse_u32(value)?),
                AttributeType::String => AttributeValue::String(value.to_string()),
                AttributeType::Link => AttributeValue::Link(value.parse()?),
                AttributeType::Route => AttributeValue::Route(value.parse()?),
            };

            tracing::debug!(key, %ty, "parsed attribute");
            config.push(Attribute::new(key, value));

            if ty == AttributeType::Terminal || at_end {
                break;
            }
        }

        Ok(config)
    }

    /// Writes one `key: value` line per attribute. Terminal attributes have no line.
    pub fn write_unpacked<W: Write>(&self, writer: &mut W) -> Result<()> {
        for attribute in self.attributes.iter() {
            let key = &attribute.key;

            let result = match &attribute.value {
                AttributeValue::Terminal => continue,
                AttributeValue::Integer(value) => writeln!(writer, "{}: {}", key, value),
                AttributeValue::String(value) => writeln!(writer, "{}: {}", key, value),
                AttributeValue::Link(link) => writeln!(writer, "{}: {}", key, link),
                AttributeValue::Route(route) => writeln!(writer, "{}: {}", key, route),
            };

            result.map_err(Error::write("attribute line"))?;
        }

        Ok(())
    }
}
