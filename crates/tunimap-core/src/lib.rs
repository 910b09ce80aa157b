pub mod error;
pub mod validate;

pub mod classify;
pub mod location;
pub mod merge;
pub mod normalize;
pub mod record;
pub mod source;

pub use crate::classify::{Classified, DropReason, Strategy};
pub use crate::error::{MergeError, Result};
pub use crate::location::CanonicalLocation;
pub use crate::merge::driver::{merge_sources, run};
pub use crate::record::RawRecord;
pub use crate::source::config::MergeConfig;
pub use crate::source::RawSource;
