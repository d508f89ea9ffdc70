#![deny(warnings)]
pub mod conflict;
pub mod factorial;
pub mod partition;
pub mod permutation;

pub use conflict::{DiagonalConflict, first_conflict, is_accepted};
pub use factorial::{LARGEST_EXACT_BOARD, factorial};
pub use partition::{StrideIndices, StridePartition, WorkerTally, count_all, count_solutions};
pub use permutation::{PermutationDecoder, decode, rank};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "nqueens"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
