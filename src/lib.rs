//! Multi-precision unsigned integers stored least-significant byte first.
//!
//! For wire and storage formats that are natively little-endian there is no
//! byte-order inversion on the way in or out: bytes pack straight into 64-bit
//! words. The surface is deliberately narrow: load/store, shifts, and bitwise
//! AND/OR against a machine word or another byte string.

pub mod size;
pub mod uint;

pub use uint::{LeUint, LoadError};
