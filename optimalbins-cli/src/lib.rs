use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use log::info;
use optimalbins::engine::Packer;
use optimalbins::heuristics::PlacementHeuristic;
use optimalbins::io::ext_repr::{ExtInstance, ExtSolution};
use optimalbins::result::PackingResult;
use thousands::Separable;

use crate::config::CliConfig;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Imports `ext_instance`, packs it as configured and exports the result.
pub fn solve(ext_instance: &ExtInstance, config: &CliConfig) -> Result<(PackingResult, ExtSolution)> {
    let packer = Packer::from_config(config.pack_config.clone())?;
    let (items, bins) = optimalbins::io::import_instance(ext_instance)?;
    info!(
        "[MAIN] packing {} items of instance {} with {}",
        items.len().separate_with_commas(),
        ext_instance.name,
        packer.strategy.metrics().algorithm
    );

    let start = Instant::now();
    let result = packer.pack(&items, bins)?;
    let run_time_ms = start.elapsed().as_millis() as u64;

    let solution = optimalbins::io::export_solution(
        &result,
        config.pack_config.number_of_decimals,
        run_time_ms,
    );
    Ok((result, solution))
}
