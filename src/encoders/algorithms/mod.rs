pub mod base16;
pub mod base32;
pub mod base64;
pub(crate) mod bits;
pub mod errors;
pub(crate) mod scanner;

pub use base16::{Base16, Case};
pub use base32::{Base32, check_symbol};
pub use base64::{Base64, Base64Alphabet};
pub use errors::{DecodeError, RegistryError, find_closest_codec};
pub use scanner::Padding;
