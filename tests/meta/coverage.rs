//! Keeps `tests/unit` a mirror of `src` and every test file populated

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    /// Relative paths of every directory and `.rs` file below `dir`
    fn mirror_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("path outside base directory"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                mirror_paths(&path, base, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn collect(dir: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        let result = mirror_paths(Path::new(dir), Path::new(dir), &mut paths);
        assert!(result.is_ok(), "failed to scan {dir}: {result:?}");
        paths
    }

    fn is_organizational(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/math/trig.rs
    #[test]
    fn test_sources_have_unit_tests() {
        let tests = collect(UNIT_DIR);
        let missing: Vec<String> = collect(SRC_DIR)
            .into_iter()
            .filter(|path| !is_organizational(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/spatial/grid.rs
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = collect(SRC_DIR);
        let orphaned: Vec<String> = collect(UNIT_DIR)
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit tests without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every test file other than module lists defines a test
    // Verified by emptying tests/unit/io/svg.rs
    #[test]
    fn test_test_files_contain_tests() {
        let mut empty = Vec::new();
        for path in collect("tests") {
            let full = Path::new("tests").join(&path);
            if full.is_dir() || path.ends_with("mod.rs") {
                continue;
            }
            let content = fs::read_to_string(&full).unwrap_or_default();
            if !content.contains("#[test]") {
                empty.push(format!("  - tests/{path}"));
            }
        }

        assert!(
            empty.is_empty(),
            "test files without #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
