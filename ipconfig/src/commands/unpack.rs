use std::io::{BufRead, BufWriter, Write};

use ipconfig_format::Config;

use crate::error::{Error, Result};

pub fn run() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    unpack(&mut stdin.lock(), &mut BufWriter::new(stdout.lock()))
}

pub(crate) fn unpack<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<()> {
    let config = Config::read_packed(reader).map_err(|source| Error::ReadPacked { source })?;
    let version = config.version();

    tracing::debug!(
        version,
        attributes = config.attributes().len(),
        "unpacking configuration"
    );

    config
        .write_unpacked(writer)
        .map_err(|source| Error::WriteUnpacked { version, source })?;

    writer.flush().map_err(|source| Error::Flush { source })
}
