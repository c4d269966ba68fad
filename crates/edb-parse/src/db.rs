//! Line-oriented parser for EPICS db and template files.
//!
//! One pass over the file text with two states: outside a record block and
//! inside one. Malformed input is recoverable, never fatal — the offending
//! block is dropped and parsing continues, since linting a large corpus
//! favors partial results over total failure.

use edb_model::{Field, Record};
use tracing::{debug, warn};

/// A record block being accumulated between its start marker and `}`.
struct RecordBlock {
    record_type: String,
    pv: String,
    infos: Vec<Field>,
    fields: Vec<Field>,
}

impl RecordBlock {
    fn into_record(self, directory: &str) -> Record {
        Record::new(directory, self.record_type, self.pv, self.infos, self.fields)
    }
}

/// Parse the full text of one db/template file into records.
///
/// `directory` tags each record with its owning directory for diagnostics.
/// Output order matches the first-appearance order of the start markers.
/// `$(...)` macros in pvs and values are preserved verbatim, never expanded.
pub fn parse_db(directory: &str, text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current: Option<RecordBlock> = None;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        let line_no = idx + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((record_type, pv)) = parse_start_marker(line) {
            if let Some(dropped) = current.take() {
                warn!(pv = %dropped.pv, line = line_no, "record block never closed, dropping");
            }
            current = Some(RecordBlock {
                record_type,
                pv,
                infos: Vec::new(),
                fields: Vec::new(),
            });
            continue;
        }

        if line == "{" {
            // Opening brace on its own line after the start marker.
            continue;
        }

        if line == "}" {
            match current.take() {
                Some(block) => records.push(block.into_record(directory)),
                None => warn!(line = line_no, "closing brace outside any record block"),
            }
            continue;
        }

        let Some(block) = current.as_mut() else {
            debug!(line = line_no, "skipping line outside record block");
            continue;
        };

        if let Some((name, value)) = parse_call(line, "field") {
            block.fields.push(Field::new(name, value));
        } else if let Some((name, value)) = parse_call(line, "info") {
            block.infos.push(Field::new(name, value));
        } else {
            debug!(line = line_no, "skipping unrecognized line in record body");
        }
    }

    if let Some(dropped) = current {
        warn!(pv = %dropped.pv, "record block open at end of file, dropping");
    }

    records
}

/// Recognize `record(TYPE, PV)` and `grecord(TYPE, PV)` start markers.
/// A trailing `{` on the same line is tolerated.
fn parse_start_marker(line: &str) -> Option<(String, String)> {
    parse_call(line, "record").or_else(|| parse_call(line, "grecord"))
}

/// Parse a `keyword(ARG1, ARG2)` line into its two arguments.
fn parse_call(line: &str, keyword: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix(keyword)?;
    let rest = rest.trim_start().strip_prefix('(')?;
    let (first, rest) = parse_argument(rest, &[',', ')'])?;
    let rest = rest.trim_start().strip_prefix(',')?;
    let (second, rest) = parse_argument(rest, &[')'])?;
    rest.trim_start().strip_prefix(')')?;
    Some((first, second))
}

/// Read one argument: either a quoted string supporting `\"` and `\\`
/// escapes, or bare text up to an unnested terminator.
///
/// Quoted arguments may contain parentheses and commas freely. Bare
/// arguments track `(`/`)` nesting so a `$(MACRO)` is kept whole.
fn parse_argument<'a>(input: &'a str, terminators: &[char]) -> Option<(String, &'a str)> {
    let input = input.trim_start();
    match input.strip_prefix('"') {
        Some(quoted) => parse_quoted(quoted),
        None => Some(parse_bare(input, terminators)),
    }
}

fn parse_quoted(input: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = input.char_indices();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => {
                let (_, escaped) = chars.next()?;
                value.push(escaped);
            }
            '"' => return Some((value, &input[idx + 1..])),
            _ => value.push(ch),
        }
    }
    // Unterminated quote: malformed line.
    None
}

fn parse_bare<'a>(input: &'a str, terminators: &[char]) -> (String, &'a str) {
    let mut depth = 0usize;
    let mut end = input.len();
    for (idx, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            ch if depth == 0 && terminators.contains(&ch) => {
                end = idx;
                break;
            }
            _ => {}
        }
    }
    (input[..end].trim_end().to_string(), &input[end..])
}
