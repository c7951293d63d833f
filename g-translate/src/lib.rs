#![doc = include_str!("../README.md")]

pub mod translate;

/// API key handling for the translate client
pub mod credentials;
