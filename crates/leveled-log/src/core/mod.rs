pub mod facade;
pub mod flags;
pub mod format;
pub mod level;
pub mod stream;
pub mod types;
pub mod writer;
