use std::io::{BufRead, BufWriter, Write};

use ipconfig_format::Config;

use crate::error::{Error, Result};

pub fn run(version: u32) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    pack(&mut stdin.lock(), &mut BufWriter::new(stdout.lock()), version)
}

pub(crate) fn pack<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, version: u32) -> Result<()> {
    let config = Config::read_unpacked(reader, version)
        .map_err(|source| Error::ReadUnpacked { version, source })?;

    tracing::debug!(
        version,
        attributes = config.attributes().len(),
        "packing configuration"
    );

    config
        .write_packed(writer)
        .map_err(|source| Error::WritePacked { source })?;

    writer.flush().map_err(|source| Error::Flush { source })
}
