//! Page replacement policies.
//!
//! - [`belady`]: offline optimal (furthest-in-future) replacement over a
//!   request sequence known in advance.

pub mod belady;
