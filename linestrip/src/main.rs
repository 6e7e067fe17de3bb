//! Main binary entry point for linestrip.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()` function
//! so it behaves exactly like the `linestrip` binary from the cli crate.

use anyhow::Result;

fn main() -> Result<()> {
    let code = linestrip::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
