mod client;
mod errors;
mod query;
mod transport;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, DEFAULT_VERSION};
pub use self::errors::Error;
pub use self::query::{InfoQuery, LinkRef, Query, ShortenQuery, SHORT_URL_PREFIX};
pub use self::transport::{HttpTransport, Transport, TransportError};
