use std::fs;
use std::path::Path;

use discpack::io::ext_repr::{ExtBPInstance, ExtItem};

use crate::error::OBFError;

/// Reads a catalog of `<tag> <size>` records from a text file.
pub fn read_catalog(path: &Path, bin_capacity: f64) -> Result<ExtBPInstance, OBFError> {
    if !path.exists() {
        return Err(OBFError::InputNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| OBFError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let content = decode_catalog(&bytes)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    parse_catalog(&name, content, bin_capacity)
}

/// Interprets the catalog as UTF-8, invalid content is reported on the line it occurs.
pub fn decode_catalog(bytes: &[u8]) -> Result<&str, OBFError> {
    std::str::from_utf8(bytes).map_err(|err| {
        let valid = &bytes[..err.valid_up_to()];
        OBFError::MalformedRecord {
            line: valid.iter().filter(|b| **b == b'\n').count() + 1,
            reason: "record is not valid UTF-8".to_string(),
        }
    })
}

/// Parses the content of a catalog, one record per line.
/// Blank lines are skipped, every other line must consist of exactly a tag and a strictly positive size.
pub fn parse_catalog(
    name: &str,
    content: &str,
    bin_capacity: f64,
) -> Result<ExtBPInstance, OBFError> {
    let mut items = vec![];
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (tag, size) = parse_record(line).map_err(|reason| OBFError::MalformedRecord {
            line: i + 1,
            reason,
        })?;
        items.push(ExtItem {
            id: items.len() as u64,
            tag: tag.to_string(),
            size,
        });
    }

    Ok(ExtBPInstance {
        name: name.to_string(),
        bin_capacity,
        items,
    })
}

fn parse_record(line: &str) -> Result<(&str, f64), String> {
    let mut tokens = line.split_whitespace();
    let (tag, size) = match (tokens.next(), tokens.next()) {
        (Some(tag), Some(size)) => (tag, size),
        (Some(tag), None) => return Err(format!("no size given for {tag:?}")),
        _ => return Err("empty record".to_string()),
    };
    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected content {extra:?} after the size of {tag:?}"));
    }
    let size = size
        .parse::<f64>()
        .map_err(|_| format!("size {size:?} of {tag:?} is not a number"))?;
    match size.is_finite() && size > 0.0 {
        true => Ok((tag, size)),
        false => Err(format!(
            "size of {tag:?} should be strictly positive, got {size}"
        )),
    }
}
