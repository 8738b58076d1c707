mod common;
pub use self::common::{LinkRef, Query, SHORT_URL_PREFIX};

mod shorten;
pub use self::shorten::ShortenQuery;

mod info;
pub use self::info::InfoQuery;
