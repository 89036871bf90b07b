use crate::error::{IoContext, ParseError, RankResult};
use crate::suggest::{Candidate, DetectedError, Feature, FeatureRegistry};
use std::io::BufRead;
use tracing::debug;

/// Parse the feature header and error blocks from `reader`.
///
/// Lines are trimmed before interpretation. Consecutive blank lines act as
/// a single separator, and a header arriving without a preceding blank line
/// closes the pending error.
pub fn parse<R: BufRead>(reader: R) -> RankResult<(FeatureRegistry, Vec<DetectedError>)> {
    let mut registry = FeatureRegistry::new();
    let mut errors = Vec::new();
    let mut in_header = true;
    let mut current: Option<DetectedError> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.io_context("reading dataset", None)?;
        let line = line.trim();

        if in_header {
            if line.is_empty() {
                in_header = false;
                debug!(features = registry.size(), "parsed feature header");
            } else {
                registry.register(Feature::new(line))?;
            }
            continue;
        }

        if line.is_empty() {
            errors.extend(current.take());
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() == 1 {
            errors.extend(current.replace(DetectedError::new(fields[0])));
            continue;
        }

        let error = current
            .as_mut()
            .ok_or(ParseError::CandidateOutsideError { line: line_no })?;
        error.add(parse_candidate(&fields, registry.size(), line_no)?);
    }
    errors.extend(current);

    debug!(errors = errors.len(), "parsed dataset");
    Ok((registry, errors))
}

fn parse_candidate(fields: &[&str], features: usize, line: usize) -> Result<Candidate, ParseError> {
    let expected = features + 2;
    if fields.len() != expected {
        return Err(ParseError::FieldCount {
            line,
            expected,
            found: fields.len(),
        });
    }

    let values = fields[1..=features]
        .iter()
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidFeatureValue {
                    line,
                    value: raw.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let label = match fields[expected - 1].trim() {
        "0" => false,
        "1" => true,
        other => {
            return Err(ParseError::InvalidLabel {
                line,
                value: other.to_string(),
            })
        }
    };

    Ok(Candidate::new(fields[0].trim(), values, label))
}
