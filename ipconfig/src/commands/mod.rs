pub mod pack;
pub mod unpack;

pub use pack::run as pack;
pub use unpack::run as unpack;
