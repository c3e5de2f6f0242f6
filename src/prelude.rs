pub use crate::batch::{
    DepthFirstSearch, FurthestFuturePaging, IntervalScheduling, InversionCount, run_batch,
};
pub use crate::ds::{FutureUses, LabelInterner, NextUse, VictimHeap};
pub use crate::error::{BatchError, ConfigError, InputError, InputErrorKind};
pub use crate::graph::Graph;
pub use crate::input::Scanner;
pub use crate::inversion::{count_inversions, sort_and_count};
pub use crate::policy::belady::{Access, OfflineOptimalCache, PagingReport, simulate};
pub use crate::schedule::{Job, max_compatible, select_jobs};
pub use crate::traits::BatchProblem;
