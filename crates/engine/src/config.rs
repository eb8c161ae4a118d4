//! Pattern set configuration
//!
//! Patterns are authored externally and loaded once at engine construction
//! as read-only configuration. The on-disk format is a small JSON document:
//!
//! ```json
//! {
//!   "patterns": [
//!     { "name": "row-of-three", "rows": [[true, true, true]] },
//!     { "name": "square", "rows": [[true, true], [true, true]] }
//!   ]
//! }
//! ```
//!
//! List order matters: it is the scanner's tie-break order per anchor.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use mark_match_core::Pattern;

/// One authored pattern: a name for error reporting plus its boolean rows.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDef {
    pub name: String,
    pub rows: Vec<Vec<bool>>,
}

#[derive(Debug, Deserialize)]
struct PatternSetFile {
    patterns: Vec<PatternDef>,
}

/// Parse a pattern set document into validated patterns.
pub fn parse_pattern_set(json: &str) -> Result<Vec<Pattern>> {
    let file: PatternSetFile =
        serde_json::from_str(json).context("invalid pattern set document")?;
    file.patterns
        .iter()
        .map(|def| {
            Pattern::from_rows(&def.rows).with_context(|| format!("pattern {:?}", def.name))
        })
        .collect()
}

/// Load and parse a pattern set file.
pub fn load_pattern_set(path: &Path) -> Result<Vec<Pattern>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading pattern set {}", path.display()))?;
    parse_pattern_set(&json)
}

/// Built-in pattern set used when no file is given.
pub fn default_patterns() -> Vec<Pattern> {
    let defs = [
        // row-of-three
        vec![vec![true, true, true]],
        // column-of-three
        vec![vec![true], vec![true], vec![true]],
        // square
        vec![vec![true, true], vec![true, true]],
    ];

    defs.iter()
        .map(|rows| Pattern::from_rows(rows).expect("built-in pattern is well-formed"))
        .collect()
}
