//! Helper SDK for the compliant-market contract suite.
//!
//! The contracts themselves are compiled and audited elsewhere; this crate
//! only carries their call surface. It provides typed bindings for the
//! methods the automation touches, runtime loading of compilation
//! artifacts, and per-contract helper factories exposing `deploy` and
//! `attach` entry points.

pub mod abis;
pub mod artifacts;
pub mod errors;
pub mod helpers;
pub mod roles;
