use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use optimalbins::io::svg::bin_to_svg;
use optimalbins_cli::config::CliConfig;
use optimalbins_cli::io;
use optimalbins_cli::io::cli::Cli;
use optimalbins_cli::io::output::Output;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    info!("[MAIN] Successfully parsed config: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {}", args.solution_folder.display())
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let (result, solution) = optimalbins_cli::solve(&ext_instance, &config)?;
    info!("[MAIN] packing finished\n{result}");

    for (i, bin) in result.bins.iter().enumerate() {
        let svg_path = args.solution_folder.join(format!("sol_{input_stem}_{i}.svg"));
        io::write_svg(&bin_to_svg(bin, config.svg_draw_options), &svg_path)?;
    }

    let output = Output {
        instance: ext_instance,
        solution,
        config,
    };
    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(())
}
