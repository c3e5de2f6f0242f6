pub mod future_uses;
pub mod interner;
pub mod victim_heap;

pub use future_uses::{FutureUses, NextUse};
pub use interner::LabelInterner;
pub use victim_heap::VictimHeap;
