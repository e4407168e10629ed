//! Checks that the unit test tree mirrors the source tree

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

const SRC_DIR: &str = "src";
const UNIT_DIR: &str = "tests/unit";
const TESTS_DIR: &str = "tests";

// Entry points and module organization files need no mirrored test file
fn is_organizational(relative: &str) -> bool {
    relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
}

fn relative_rust_paths(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let relative = path
            .strip_prefix(base)
            .map_err(|_stripped| io::Error::other("path outside base directory"))?
            .to_string_lossy()
            .replace('\\', "/");

        if path.is_dir() {
            out.insert(relative);
            relative_rust_paths(&path, base, out)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            out.insert(relative);
        }
    }
    Ok(())
}

fn collect(dir: &str) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    let result = relative_rust_paths(Path::new(dir), Path::new(dir), &mut paths);
    assert!(result.is_ok(), "Failed to read {dir}: {result:?}");
    paths
}

#[test]
fn test_every_source_file_has_unit_tests() {
    let unit = collect(UNIT_DIR);
    let missing: Vec<_> = collect(SRC_DIR)
        .into_iter()
        .filter(|path| !is_organizational(path) && !unit.contains(path))
        .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
        .collect();

    assert!(
        missing.is_empty(),
        "Source files without unit test counterparts:\n{}",
        missing.join("\n")
    );
}

#[test]
fn test_every_unit_test_has_source() {
    let src = collect(SRC_DIR);
    let orphaned: Vec<_> = collect(UNIT_DIR)
        .into_iter()
        .filter(|path| !path.ends_with("mod.rs") && !src.contains(path))
        .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
        .collect();

    assert!(
        orphaned.is_empty(),
        "Unit test files without source counterparts:\n{}",
        orphaned.join("\n")
    );
}

#[test]
fn test_every_test_file_contains_tests() {
    let mut empty = Vec::new();

    for relative in collect(TESTS_DIR) {
        let path = Path::new(TESTS_DIR).join(&relative);
        if path.is_dir() || relative.ends_with("mod.rs") {
            continue;
        }
        let content = fs::read_to_string(&path);
        assert!(content.is_ok(), "Failed to read {}", path.display());
        if !content.is_ok_and(|text| text.contains("#[test]")) {
            empty.push(format!("  - {}", path.display()));
        }
    }

    assert!(
        empty.is_empty(),
        "Test files without any #[test] functions:\n{}",
        empty.join("\n")
    );
}
