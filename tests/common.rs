use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn roam() -> Command {
    cargo_bin_cmd!("roam")
}

/// A 4-vertex line graph: 0 -1.5- 1 -2.2- 2 -3.1- 3
pub const LINE_MATRIX: &str = "4\n\
    0 1.5 0 0\n\
    1.5 0 2.2 0\n\
    0 2.2 0 3.1\n\
    0 0 3.1 0\n";

/// A 4-vertex cycle where greedy follows 0 -> 1 -> 2 -> 3 -> 0
pub const CYCLE_MATRIX: &str = "4\n\
    0 1 5 2\n\
    1 0 1 5\n\
    5 1 0 1\n\
    2 5 1 0\n";

#[allow(dead_code)]
pub fn write_matrix(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write matrix fixture");
    path
}
