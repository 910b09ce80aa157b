// crates/tunimap-cli/src/cmd/mod.rs

pub mod inspect;
pub mod merge;
pub mod sources;
