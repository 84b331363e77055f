pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected end of stream while reading {0}.")]
    Truncated(&'static str),

    #[error("Unsupported file version {0} (supported versions are 1 to 3).")]
    UnsupportedVersion(u32),

    #[error("Unrecognized attribute key '{key}' for version {version}.")]
    UnknownKey { key: String, version: u32 },

    #[error("Malformed {field}: '{value}'")]
    MalformedField { field: &'static str, value: String },

    #[error("Could not allocate {0} bytes.")]
    AllocationFailure(usize),

    #[error("Failed to write {1}.")]
    WriteFailure(#[source] std::io::Error, &'static str),

    #[error("Failed to read {1}.")]
    ReadFailed(#[source] std::io::Error, &'static str),
}

impl Error {
    pub(crate) fn malformed<S: Into<String>>(field: &'static str, value: S) -> Error {
        Error::MalformedField {
            field,
            value: value.into(),
        }
    }

    /// Maps a read error, treating a short read as truncation of `field`.
    pub(crate) fn read(field: &'static str) -> impl FnOnce(std::io::Error) -> Error {
        move |e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::Truncated(field),
            _ => Error::ReadFailed(e, field),
        }
    }

    pub(crate) fn write(field: &'static str) -> impl FnOnce(std::io::Error) -> Error {
        move |e| Error::WriteFailure(e, field)
    }
}
