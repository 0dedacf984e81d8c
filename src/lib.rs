/// Dionysios - Ancient Greek morphological analyzer
///
/// Core library: recovers the rule and root word behind an inflected Greek
/// form, and aggregates accepted analyses into a shared lexicon.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
