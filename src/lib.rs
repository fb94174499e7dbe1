#![doc = include_str!("RUSTDOC.md")]

pub mod crittercism;
pub mod integration;

#[cfg(test)]
pub mod test_support;
