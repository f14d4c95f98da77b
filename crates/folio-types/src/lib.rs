pub mod message;
pub mod payload;
pub mod command;
pub mod profile;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::FolioError;
pub type Result<T> = std::result::Result<T, FolioError>;
