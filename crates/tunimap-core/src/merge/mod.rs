pub mod container;
pub mod driver;
pub mod output;
pub mod report;
pub mod resolve;
