//! Tree Uncommenting Integration Tests
//!
//! Walks a small project tree and rewrites every matching file, the way the
//! command line drives the library.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use uncomment_fs::{has_extension, recurse, uncomment_file, WalkError};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_uncomment_whole_tree() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Program.cs", "using System; // sys\n");
    write(root, "Models/User.cs", "/* model */\nclass User {}\n");
    write(root, "Models/Deep/Role.cs", "class Role { string n = \"//\"; }\n");
    write(root, "README.md", "// not source\n");

    let mut done = Vec::new();
    recurse(root, has_extension("cs"), |file: &Path| {
        uncomment_file(file)?;
        done.push(file.strip_prefix(root).unwrap().to_path_buf());
        Ok::<(), WalkError>(())
    })
    .unwrap();

    assert_eq!(done.len(), 3);
    assert_eq!(
        fs::read_to_string(root.join("Program.cs")).unwrap(),
        "using System; \r\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("Models/User.cs")).unwrap(),
        "class User {}\r\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("Models/Deep/Role.cs")).unwrap(),
        "class Role { string n = \"//\"; }\r\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("README.md")).unwrap(),
        "// not source\n"
    );
}

#[test]
fn test_isolating_action_keeps_walking_after_failure() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a/Bad.cs", "");
    fs::write(root.join("a/Bad.cs"), b"\xff\xff").unwrap();
    write(root, "b/Good.cs", "int x; // x\n");

    let mut failed = Vec::new();
    recurse(root, has_extension("cs"), |file: &Path| {
        if let Err(err) = uncomment_file(file) {
            failed.push(err);
        }
        Ok::<(), WalkError>(())
    })
    .unwrap();

    assert_eq!(failed.len(), 1);
    assert!(failed[0].path().ends_with("Bad.cs"));
    assert_eq!(
        fs::read_to_string(root.join("b/Good.cs")).unwrap(),
        "int x; \r\n"
    );
}

#[test]
fn test_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let err = recurse(&missing, has_extension("cs"), |_: &Path| Ok::<(), WalkError>(()))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("Directory {} does not exist.", missing.display())
    );
}
