//! JSON-lines batch verification
//!
//! Input, one object per line (blank lines skipped):
//!
//! ```text
//! {"id": "tx-1", "payee_name": "ШЕВЧЕНКО Т.Г.", "account_name": "ШЕВЧЕНКО ТАРАС ГРИГОРОВИЧ"}
//! {"name1": "КОВАЛЕНКО МАРІЯ", "name2": "КОВАЛЕНКО МАРІЯ ПЕТРІВНА"}
//! ```
//!
//! Output, one object per input pair in the same order:
//!
//! ```text
//! {"id":"tx-1","status":"MATCH","score":100.0,"algorithm":"initials",...}
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use vop_core::{MatchResult, MatchStatus, Matcher};

use crate::error::{Error, Result};

/// One name pair to verify
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamePair {
    /// Caller's correlation id, echoed back
    #[serde(default)]
    pub id: Option<String>,
    /// Name from the payment instruction
    #[serde(alias = "payee_name")]
    pub name1: String,
    /// Name on file for the account
    #[serde(alias = "account_name")]
    pub name2: String,
}

/// Output record: the correlation id plus the verdict fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(flatten)]
    pub result: &'a MatchResult,
}

/// Per-status counts for a processed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub matched: usize,
    pub close_matched: usize,
    pub not_matched: usize,
}

impl Summary {
    fn record(&mut self, status: MatchStatus) {
        self.total += 1;
        match status {
            MatchStatus::Match => self.matched += 1,
            MatchStatus::CloseMatch => self.close_matched += 1,
            MatchStatus::NoMatch => self.not_matched += 1,
        }
    }
}

/// Pairs scored per batch when streaming
pub const CHUNK_SIZE: usize = 1024;

/// Parse pairs lazily from a JSON-lines reader.
///
/// Blank lines are skipped; a malformed line yields [`Error::InvalidRecord`]
/// carrying its 1-based line number.
pub fn read_pairs<R: BufRead>(reader: R) -> impl Iterator<Item = Result<NamePair>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| -> Option<Result<NamePair>> {
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if line.trim().is_empty() {
                return None;
            }
            Some(
                serde_json::from_str(&line).map_err(|source| Error::InvalidRecord {
                    line: idx + 1,
                    source,
                }),
            )
        })
}

/// Verify every pair from `reader`, writing one verdict line per pair to `writer`.
///
/// Input is scored in chunks of [`CHUNK_SIZE`] pairs, so memory stays bounded
/// on large files. Output order is the input order.
pub fn run<R, W>(matcher: &Matcher, reader: R, writer: W, parallel: bool) -> Result<Summary>
where
    R: BufRead,
    W: Write,
{
    run_chunked(matcher, reader, writer, parallel, CHUNK_SIZE)
}

/// [`run`] with an explicit chunk size (at least 1).
///
/// With `parallel` set each chunk goes through [`Matcher::match_batch`];
/// otherwise pairs are scored one at a time. Verdicts for earlier chunks are
/// already written when a later line fails to parse.
pub fn run_chunked<R, W>(
    matcher: &Matcher,
    reader: R,
    mut writer: W,
    parallel: bool,
    chunk_size: usize,
) -> Result<Summary>
where
    R: BufRead,
    W: Write,
{
    let chunk_size = chunk_size.max(1);
    let mut summary = Summary::default();
    let mut chunk = Vec::with_capacity(chunk_size);

    for pair in read_pairs(reader) {
        chunk.push(pair?);
        if chunk.len() == chunk_size {
            write_chunk(matcher, &chunk, &mut writer, parallel, &mut summary)?;
            chunk.clear();
        }
    }
    if !chunk.is_empty() {
        write_chunk(matcher, &chunk, &mut writer, parallel, &mut summary)?;
    }
    writer.flush()?;

    Ok(summary)
}

fn write_chunk<W: Write>(
    matcher: &Matcher,
    pairs: &[NamePair],
    writer: &mut W,
    parallel: bool,
    summary: &mut Summary,
) -> Result<()> {
    tracing::debug!(pairs = pairs.len(), parallel, "scoring chunk");

    let results: Vec<MatchResult> = if parallel {
        let names: Vec<(&str, &str)> = pairs
            .iter()
            .map(|p| (p.name1.as_str(), p.name2.as_str()))
            .collect();
        matcher.match_batch(&names)
    } else {
        pairs
            .iter()
            .map(|p| matcher.match_names(&p.name1, &p.name2))
            .collect()
    };

    for (pair, result) in pairs.iter().zip(&results) {
        let verdict = Verdict {
            id: pair.id.as_deref(),
            result,
        };
        serde_json::to_writer(&mut *writer, &verdict)?;
        writer.write_all(b"\n")?;
        summary.record(result.status);
    }

    Ok(())
}
