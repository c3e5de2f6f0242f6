//! algokit: offline optimal paging and classic textbook algorithms.
//!
//! The core is [`policy::belady`], a furthest-in-future (Belady's MIN) page
//! replacement simulator over a request sequence known in advance. Three leaf
//! algorithms share its batch protocol: depth-first traversal
//! ([`graph`]), greedy interval scheduling ([`schedule`]) and merge-sort
//! inversion counting ([`inversion`]).
//!
//! Each program reads `T` instances from stdin and prints one result line per
//! instance; see [`batch`] and [`traits::BatchProblem`].

pub mod batch;
pub mod ds;
pub mod error;
pub mod graph;
pub mod input;
pub mod inversion;
pub mod logging;
pub mod policy;
pub mod prelude;
pub mod schedule;
pub mod traits;
