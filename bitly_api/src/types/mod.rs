mod envelope;
pub use self::envelope::{Envelope, ResultsMap};

mod info;
pub use self::info::LinkInfo;

mod stats;
pub use self::stats::LinkStats;

mod catalog;
pub use self::catalog::ErrorEntry;
