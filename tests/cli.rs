use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, NamedTempFile};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc2022"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn prints_only_the_answer() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("day18.in"), "1,1,1\n2,1,1\n").unwrap();
    let output = run(dir.path(), &["18", "2"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10\n");
}

#[test]
fn test_inputs_by_number() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("day18.in"), "1,1,1\n").unwrap();
    fs::write(
        dir.path().join("day18test1.in"),
        "1,2,2\n3,2,2\n2,1,2\n2,3,2\n2,2,1\n2,2,3\n",
    ).unwrap();
    let output = run(dir.path(), &["18", "1", "--test", "1"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "36\n");
    let output = run(dir.path(), &["18", "2", "--test", "1"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "30\n");
}

#[test]
fn explicit_input_file() {
    let dir = tempdir().unwrap();
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "5,5,5\n").unwrap();
    let path = file.path().to_str().unwrap();
    let output = run(dir.path(), &["18", "1", "--input", path]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "6\n");
}

#[test]
fn failures_exit_nonzero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("day18.in"), "1,1,1\n1,one,1\n").unwrap();
    fs::write(dir.path().join("day3.in"), "1,1,1\n").unwrap();
    let cases: [&[&str]; 4] = [&["18", "1"], &["3", "1"], &["18", "3"], &["18", "1", "--test", "9"]];
    for args in cases {
        let output = run(dir.path(), args);
        assert!(!output.status.success(), "{:?} should fail", args);
        assert!(output.stdout.is_empty());
    }
}
