use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as ClapParser;
use clap::error::ErrorKind;
use log::{error, info};
use obf::config::OBFConfig;
use obf::error::{EXIT_USAGE, OBFError};
use obf::io::cli::Cli;
use obf::io::output::BPOutput;
use obf::io::report::{Report, ReportMeta};
use obf::opt::obf_bpp::OBFOptimizerBP;
use obf::{EPOCH, TOOL_NAME, VERSION, io};

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    if args.version {
        println!("{TOOL_NAME} version {VERSION}");
        return ExitCode::SUCCESS;
    }

    if let Err(err) = io::init_logger(args.log_level) {
        eprintln!("could not initialize logger: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("[MAIN] {err:#}");
            eprintln!("error: {err:#}");
            let code = match err.downcast_ref::<OBFError>() {
                Some(obf_err) => obf_err.exit_code(),
                None => 1,
            };
            ExitCode::from(code)
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let input_file = args.input_file.ok_or(OBFError::MissingInput)?;

    let mut config = match &args.config_file {
        None => OBFConfig::default(),
        Some(config_file) => io::read_config(config_file)?,
    };
    if let Some(capacity) = args.capacity {
        config.bin_capacity = capacity;
    }
    if !(config.bin_capacity.is_finite() && config.bin_capacity > 0.0) {
        return Err(OBFError::InvalidCapacity(config.bin_capacity).into());
    }
    info!("[MAIN] Successfully parsed OBFConfig: {config:?}");

    let output_file = args
        .output_file
        .unwrap_or_else(|| io::default_output_path(&input_file));

    let ext_instance = io::catalog::read_catalog(&input_file, config.bin_capacity)?;
    let instance = discpack::io::import(&ext_instance).map_err(OBFError::InvalidInstance)?;
    info!(
        "[MAIN] read {} items from {:?}",
        instance.n_items(),
        input_file
    );

    let mut optimizer = OBFOptimizerBP::new(instance.clone());
    let solution = optimizer.solve()?;

    let meta = ReportMeta::new(&config);
    let report = Report::new(&meta, &instance, &solution).to_string();
    io::write_report(&report, &output_file, args.append)?;

    if let Some(json_file) = args.json_file {
        let output = BPOutput {
            instance: ext_instance,
            solution: discpack::io::export(&instance, &solution, *EPOCH),
            config,
        };
        io::write_json(&output, &json_file)?;
    }

    Ok(())
}
