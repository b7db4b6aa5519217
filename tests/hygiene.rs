//! Hygiene — enforces coding standards at test time.
//!
//! Scans the production sources under `src/` (sibling `*_test.rs` files are
//! exempt) for constructs the engine must not ship: panicking macros and
//! methods, stubs, and silently discarded results. Budgets are zero and
//! never grow.

use std::fs;
use std::path::{Path, PathBuf};

/// `(needle, budget, why)` — one row per banned construct.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics take down the whole plugin"),
    (".expect(", 0, "panics take down the whole plugin"),
    ("panic!(", 0, "panics take down the whole plugin"),
    ("unreachable!(", 0, "panics take down the whole plugin"),
    ("todo!(", 0, "stubs must not ship"),
    ("unimplemented!(", 0, "stubs must not ship"),
    ("let _ =", 0, "results must be handled, not discarded"),
    (".ok();", 0, "results must be handled, not discarded"),
    ("#[allow(dead_code)]", 0, "dead code is deleted, not silenced"),
];

#[test]
fn production_sources_stay_within_budget() {
    let mut failures = Vec::new();

    for file in production_sources() {
        let content = match fs::read_to_string(&file) {
            Ok(content) => content,
            Err(err) => {
                failures.push(format!("{}: unreadable: {err}", file.display()));
                continue;
            }
        };
        for (needle, budget, why) in BUDGETS {
            let count = content.lines().filter(|line| line.contains(needle)).count();
            if count > *budget {
                failures.push(format!(
                    "{}: {count} line(s) with `{needle}` (budget {budget}; {why})",
                    file.display()
                ));
            }
        }
    }

    assert!(failures.is_empty(), "hygiene violations:\n{}", failures.join("\n"));
}

#[test]
fn every_module_is_scanned() {
    // Guard against the walk silently matching nothing after a refactor.
    assert!(!production_sources().is_empty(), "no production sources found under src/");
}

/// All `.rs` files under `src/`, minus the sibling test files.
fn production_sources() -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files.retain(|path| {
        !path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with("_test.rs"))
    });
    files.sort();
    files
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}
