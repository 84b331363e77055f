pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read unpacked configuration (version {version})")]
    ReadUnpacked {
        version: u32,
        #[source]
        source: ipconfig_format::Error,
    },

    #[error("Cannot write packed configuration")]
    WritePacked {
        #[source]
        source: ipconfig_format::Error,
    },

    #[error("Cannot read packed configuration")]
    ReadPacked {
        #[source]
        source: ipconfig_format::Error,
    },

    #[error("Cannot write unpacked configuration (version {version})")]
    WriteUnpacked {
        version: u32,
        #[source]
        source: ipconfig_format::Error,
    },

    #[error("Cannot flush standard output")]
    Flush {
        #[source]
        source: std::io::Error,
    },
}
