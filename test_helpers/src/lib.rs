//! Test helpers shared across crates.
//!
//! [`text`] normalises placeholder values captured from behavioural step
//! text, and [`attrs`] parses attribute fixtures and checks nested values in
//! merged output.

pub mod attrs;
pub mod text;
