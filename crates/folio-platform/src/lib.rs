//! Browser adapters for the folio-core ports.

pub mod answer;
pub mod handoff;

#[cfg(test)]
mod tests;
