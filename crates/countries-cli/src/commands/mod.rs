//! CLI command implementations.

mod check;
mod coverage;
mod decode;
mod list;
mod registry;
mod resolve;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use decode::{run_decode, DecodeArgs};
pub use list::{run_list, ListArgs};
pub use resolve::{run_resolve, ResolveArgs};
