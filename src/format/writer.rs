use crate::error::{IoContext, RankResult, RankingError};
use crate::suggest::{DetectedError, FeatureRegistry};
use std::io::Write;
use std::ops::Deref;

/// Write the registry and errors in the tab-separated dataset format.
///
/// Confidences are not persisted. Names the reader could not recover
/// (empty, containing tabs or line breaks, or padded with whitespace) are
/// rejected before anything is written for that name.
pub fn write<W, I, E>(mut out: W, registry: &FeatureRegistry, errors: I) -> RankResult<()>
where
    W: Write,
    I: IntoIterator<Item = E>,
    E: Deref<Target = DetectedError>,
{
    for feature in registry.iter() {
        check_name(feature.name())?;
        writeln!(out, "{}", feature.name()).io_context("writing feature header", None)?;
    }
    writeln!(out).io_context("writing feature header", None)?;

    for error in errors {
        check_name(&error.name)?;
        writeln!(out, "{}", error.name).io_context("writing error block", None)?;
        for candidate in &error.candidates {
            check_name(&candidate.name)?;
            let mut line = candidate.name.clone();
            for value in &candidate.feature_values {
                line.push('\t');
                line.push_str(&value.to_string());
            }
            line.push('\t');
            line.push_str(if candidate.label { "1" } else { "0" });
            writeln!(out, "{line}").io_context("writing candidate", None)?;
        }
        writeln!(out).io_context("writing error block", None)?;
    }

    out.flush().io_context("flushing dataset", None)
}

fn check_name(name: &str) -> RankResult<()> {
    let reason = if name.is_empty() {
        "empty names read back as block separators"
    } else if name.contains(['\t', '\n', '\r']) {
        "tabs and line breaks are field and record separators"
    } else if name.trim() != name {
        "surrounding whitespace is trimmed on read"
    } else {
        return Ok(());
    };
    Err(RankingError::InvalidName {
        name: name.to_string(),
        reason,
    })
}
