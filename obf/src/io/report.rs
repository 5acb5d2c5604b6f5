use std::fmt::{Display, Formatter};

use discpack::entities::{BPInstance, BPSolution, Item};
use jiff::Timestamp;

use crate::config::OBFConfig;
use crate::{TOOL_NAME, VERSION};

const HEADER_WIDTH: usize = 49;

/// Metadata printed in the header of a report
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub tool: &'static str,
    pub version: &'static str,
    pub generated: Timestamp,
    pub author: Option<String>,
    pub bin_capacity: f64,
}

impl ReportMeta {
    pub fn new(config: &OBFConfig) -> Self {
        Self {
            tool: TOOL_NAME,
            version: VERSION,
            generated: Timestamp::now(),
            author: config.author.clone(),
            bin_capacity: config.bin_capacity,
        }
    }
}

/// A labelled section of the report, listing the tag and size of each item
#[derive(Debug, Clone, PartialEq)]
pub struct ReportGroup<'a> {
    pub label: String,
    pub items: Vec<(&'a str, f64)>,
}

impl<'a> ReportGroup<'a> {
    fn new(label: String, items: impl IntoIterator<Item = &'a Item>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.tag.as_str(), item.size))
            .collect();
        Self { label, items }
    }
}

/// One group per used bin, in order of the bin index
pub fn report_groups<'a>(
    instance: &'a BPInstance,
    solution: &'a BPSolution,
) -> Vec<ReportGroup<'a>> {
    solution
        .bin_items(instance)
        .map(|(bin, items)| ReportGroup::new(format!("Bin {}", bin.id + 1), items))
        .collect()
}

/// Human-readable report of a solution
pub struct Report<'a> {
    pub meta: &'a ReportMeta,
    pub groups: Vec<ReportGroup<'a>>,
    /// Items which could not be packed, if any
    pub excluded: Option<ReportGroup<'a>>,
}

impl<'a> Report<'a> {
    pub fn new(meta: &'a ReportMeta, instance: &'a BPInstance, solution: &'a BPSolution) -> Self {
        let unplaced = solution.unplaced_items(instance);
        let excluded = match unplaced.is_empty() {
            true => None,
            false => Some(ReportGroup::new(
                "Excluded (larger than a bin)".to_string(),
                unplaced,
            )),
        };
        Self {
            meta,
            groups: report_groups(instance, solution),
            excluded,
        }
    }

    fn fmt_header(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let meta = self.meta;
        let title = format!(" Created with {} ", meta.tool);
        writeln!(f, "{title:=^width$}", width = HEADER_WIDTH)?;
        self.fmt_header_line(f, "")?;
        let date = meta.generated.strftime("%Y-%m-%d %H:%M:%S UTC");
        self.fmt_header_line(f, &format!("Date: {date}"))?;
        if let Some(author) = &meta.author {
            self.fmt_header_line(f, &format!("Author: {author}"))?;
        }
        self.fmt_header_line(f, &format!("Version: {}", meta.version))?;
        self.fmt_header_line(f, &format!("Bin capacity: {}", meta.bin_capacity))?;
        self.fmt_header_line(f, "")?;
        writeln!(f, "{}", "=".repeat(HEADER_WIDTH))?;
        writeln!(f)
    }

    fn fmt_header_line(&self, f: &mut Formatter<'_>, text: &str) -> std::fmt::Result {
        writeln!(f, "=   {text:<width$}=", width = HEADER_WIDTH - 5)
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_header(f)?;
        for group in self.groups.iter().chain(self.excluded.as_ref()) {
            write!(f, "\n{}\n\n", group.label)?;
            for (tag, size) in &group.items {
                writeln!(f, "   Tag: {tag}")?;
                writeln!(f, "   Size: {size}")?;
            }
        }
        Ok(())
    }
}
