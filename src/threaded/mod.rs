//! Multi-threaded multiplication.
//!
//! Output rows are split into contiguous blocks, one per worker thread.
//! Each worker owns the only mutable borrow of its block, so workers never
//! contend on the result.
//!
//! - `partition`: row range planning
//! - `row_split`: scoped-thread dispatch over the planned ranges

pub mod partition;
pub mod row_split;
