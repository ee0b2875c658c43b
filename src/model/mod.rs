//! Core value types for prooftree

mod digest;

pub use digest::Digest;
