//! Hygiene checks for `client/src/`.
//!
//! Each antipattern carries a budget of production occurrences (`*_test.rs`
//! files are skipped). The budget only ever shrinks: adding a hit means
//! removing another one first.

use std::fs;
use std::path::{Path, PathBuf};

// Panicking calls.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// `let _ =` only appears in SSR stubs that consume the arguments of
// browser-only calls.
const MAX_SILENT_DISCARD: usize = 16;

// Storage and parse failures collapsed into "absent". One hit is
// `Response::ok()`.
const MAX_DOT_OK: usize = 10;

const MAX_ALLOW_DEAD_CODE: usize = 0;

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rust || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path, content));
        }
    }
}

fn assert_budget(pattern: &str, max: usize) {
    let sources = production_sources();
    assert!(!sources.is_empty(), "no sources found; run from the client crate root");

    let hits: Vec<(String, usize)> = sources
        .iter()
        .map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (path.display().to_string(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, count)| count).sum();

    let report = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found <= max, "`{pattern}` budget exceeded: found {found}, max {max}.\n{report}");
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}
