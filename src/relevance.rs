//! Relevance-set construction from state definition files.
//!
//! Each state file may contain a `provinces = { ... }` block listing the
//! province ids that belong to it. Only the first block per file counts;
//! files without one contribute nothing.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

use crate::classifier::ProvinceId;

/// Scan a directory of `*.txt` state files and union all province ids found
/// in their `provinces = { ... }` blocks.
pub fn load_state_provinces(states_dir: &Path) -> io::Result<HashSet<ProvinceId>> {
    let block_re = Regex::new(r"provinces\s*=\s*\{([^}]*)\}").unwrap();
    let id_re = Regex::new(r"\d+").unwrap();

    let mut relevant = HashSet::new();
    for entry in fs::read_dir(states_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let text = fs::read_to_string(&path)?;
        if let Some(block) = block_re.captures(&text) {
            for m in id_re.find_iter(&block[1]) {
                if let Ok(pid) = m.as_str().parse::<ProvinceId>() {
                    relevant.insert(pid);
                }
            }
        }
    }
    Ok(relevant)
}
