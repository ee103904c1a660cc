//! Integration tests driving a shell session through scripted input

use tempfile::TempDir;
use treefs::config::ReportFormat;
use treefs::shell;

use crate::integration::{assert_btree_invariants, scripted_session};

fn run_script(temp_dir: &TempDir, order: usize, script: &str) -> (shell::Session, String) {
    let mut session = scripted_session(temp_dir, order);
    let mut out = Vec::new();
    shell::run(&mut session, script.as_bytes(), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn test_nested_session_and_report_on_exit() {
    let temp_dir = TempDir::new().unwrap();
    let script = "\
mkdir projects
cd projects
mkdir rust
echo todo.txt write   more tests
cd rust
touch main.rs
pwd
cd ..
cat todo.txt
cd ..
ls
exit
";
    let (_, output) = run_script(&temp_dir, 2, script);

    assert!(output.contains("Moved to /projects/rust"));
    assert!(output.contains("$ /projects/rust\n"));
    assert!(output.contains("Returned to /projects"));
    assert!(output.contains("write   more tests"));
    assert!(output.contains("Size: 18 bytes"));
    assert!(output.contains("Contents of /:\nprojects/"));
    assert!(output.contains("Leaving the virtual file system. Goodbye!"));

    let report = std::fs::read_to_string(temp_dir.path().join("fs.img")).unwrap();
    assert!(report.contains("├── projects/"));
    assert!(report.contains("├── main.rs (0 bytes)"));
    assert!(report.contains("│   Content: write   more tests"));
}

#[test]
fn test_failed_commands_do_not_mutate() {
    let temp_dir = TempDir::new().unwrap();
    let script = "\
mkdir docs
touch docs
rm docs
rmdir missing
cd docs
touch a
cd ..
rmdir docs
mkdir
cd ..
cd ..
";
    let (session, output) = run_script(&temp_dir, 3, script);

    assert!(output.contains("already exists"));
    assert!(output.contains("Usage: mkdir <directory>"));
    assert!(output.contains("Already at the root directory."));
    assert_eq!(session.root().len(), 1);
    assert!(session.cursor().is_at_root());
    // end of input does not save
    assert!(!temp_dir.path().join("fs.img").exists());
}

#[test]
fn test_many_files_keep_tree_valid() {
    let temp_dir = TempDir::new().unwrap();
    let mut script = String::new();
    for i in 0..100 {
        script.push_str(&format!("touch file{:03}\n", (i * 53) % 100));
    }
    for i in 0..100 {
        script.push_str(&format!("rm file{:03}\n", i));
    }
    let (session, _) = run_script(&temp_dir, 2, &script);

    // keys held by internal nodes cannot be removed
    let remaining = session.root().len();
    assert!(remaining > 0 && remaining < 100);
    assert!(session.root().height() > 1);
    assert_only_internal_keys_remain(&session);
}

fn assert_only_internal_keys_remain(session: &shell::Session) {
    let root = session.root();
    for item in root.traverse() {
        assert!(item.depth < root.height() - 1, "leaf key survived rm");
    }
}

#[test]
fn test_json_save() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = scripted_session(&temp_dir, 3);
    let mut config = session.config().clone();
    config.report.format = ReportFormat::Json;
    config.report.path = temp_dir.path().join("fs.json");
    session = shell::Session::new(config).unwrap();

    let mut out = Vec::new();
    shell::run(&mut session, "echo a 1\nsave\n".as_bytes(), &mut out).unwrap();
    let report = std::fs::read_to_string(temp_dir.path().join("fs.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value["root"][0]["name"], "a");
    assert_eq!(value["root"][0]["content"], "1");
    assert_btree_invariants(session.root());
}
