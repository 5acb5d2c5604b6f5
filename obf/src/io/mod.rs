use std::fs;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;
use crate::config::OBFConfig;
use crate::error::OBFError;

pub mod catalog;
pub mod cli;
pub mod output;
pub mod report;

/// Name of the report file written next to the input when no output file is given
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "output.txt";

pub fn read_config(path: &Path) -> Result<OBFConfig, OBFError> {
    let invalid_config = |source: anyhow::Error| OBFError::InvalidConfig {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|err| invalid_config(err.into()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|err| invalid_config(err.into()))
}

/// `output.txt` in the directory of the input file
pub fn default_output_path(input_file: &Path) -> PathBuf {
    match input_file.parent() {
        Some(dir) => dir.join(DEFAULT_OUTPUT_FILE_NAME),
        None => PathBuf::from(DEFAULT_OUTPUT_FILE_NAME),
    }
}

/// Writes the rendered report in a single write, appending to an existing file if `append` is set.
pub fn write_report(report: &str, path: &Path, append: bool) -> Result<(), OBFError> {
    write_file(path, append, |writer| writer.write_all(report.as_bytes()))?;
    info!("[IO] report written to {:?}", display_path(path));
    Ok(())
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<(), OBFError> {
    write_file(path, false, |writer| {
        serde_json::to_writer_pretty(writer, output).map_err(std::io::Error::from)
    })?;
    info!("[IO] solution written to {:?}", display_path(path));
    Ok(())
}

fn write_file(
    path: &Path,
    append: bool,
    write: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
) -> Result<(), OBFError> {
    let output_write_failure = |source| OBFError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(output_write_failure)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(output_write_failure)?;

    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(output_write_failure)?;
    writer.flush().map_err(output_write_failure)
}

fn display_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // blanket level filter
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}
