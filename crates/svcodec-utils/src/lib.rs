//! Internal utilities for the svcodec state-variable codec.
//!
//! This crate provides the low-level text scanning used by `svcodec-core` when
//! it reads user-entered values. The scanners follow the lenient prefix rules
//! of the control panels the codec serves: they read as much of a number as
//! they can and ignore whatever trails it.
//!
//! # Usage
//!
//! This crate is an internal implementation detail. Use the `svcodec` facade
//! crate instead.
//!
//! # Contents
//!
//! - [`float_prefix`] - longest decimal float at the start of a string
//! - [`int_prefix`] - longest integer (decimal or `0x` hex) at the start of a string

pub mod scan;

pub use scan::{float_prefix, int_prefix};
