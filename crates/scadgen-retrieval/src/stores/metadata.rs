//! Chunk metadata file: one JSON object per line.

use std::path::Path;

use scadgen_core::errors::RetrievalError;
use scadgen_core::models::ChunkMetadata;
use tracing::warn;

/// Parse metadata records. Blank lines are ignored; malformed lines are
/// skipped with a warning so one bad record does not hide the corpus.
pub fn parse_metadata(content: &str) -> Vec<ChunkMetadata> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match serde_json::from_str::<ChunkMetadata>(line) {
            Ok(record) => Some(record),
            Err(e) => {
                let err = RetrievalError::MetadataParse {
                    line: index + 1,
                    reason: e.to_string(),
                };
                warn!(error = %err, "skipping chunk metadata record");
                None
            }
        })
        .collect()
}

pub fn load_metadata(path: &Path) -> Result<Vec<ChunkMetadata>, RetrievalError> {
    let content = std::fs::read_to_string(path).map_err(|e| RetrievalError::StoreUnavailable {
        store: "lexical".to_string(),
        reason: format!("cannot read {}: {e}", path.display()),
    })?;
    Ok(parse_metadata(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_lines_are_skipped() {
        let content = r#"{"chunk_file":"a.scad","library":"BOSL2","chunk_index":0,"source_path":"BOSL2/a.scad"}

not json
{"chunk_file":"b.scad","library":"MCAD"}
"#;
        let records = parse_metadata(content);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].library, "MCAD");
        assert_eq!(records[1].chunk_index, 0);
    }
}
