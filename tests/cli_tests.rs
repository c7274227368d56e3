mod common;
use common::{
    NEGATIVE_ENTRY, POSITIVE_ENTRY, dir_arg, init_with_user, scope, temp_dir, write_fixture_model,
};
use predicates::str::contains;
use std::fs;

fn analyze_args<'a>(d: &'a str, entries: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![
        "--data-dir",
        d,
        "analyze",
        "--mood",
        "neutral",
        "--help-status",
        "no",
    ];
    for e in entries {
        args.push("-e");
        args.push(*e);
    }
    args
}

#[test]
fn test_login_registers_then_welcomes_back() {
    let dir = temp_dir("cli_login");
    let d = dir_arg(&dir);

    scope()
        .args(["--data-dir", &d, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("SCOPE initialization completed"));

    scope()
        .args(["--data-dir", &d, "login", "alice", "--name", "Alice"])
        .assert()
        .success()
        .stdout(contains("New user created: Alice"));

    scope()
        .args(["--data-dir", &d, "whoami"])
        .assert()
        .success()
        .stdout(contains("Logged in as Alice (alice)"));

    scope()
        .args(["--data-dir", &d, "login", "bob", "--name", "Bob"])
        .assert()
        .failure()
        .stderr(contains("Already logged in as 'alice'"));

    scope()
        .args(["--data-dir", &d, "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out alice."));

    scope()
        .args(["--data-dir", &d, "login", "alice", "--name", "Alice"])
        .assert()
        .success()
        .stdout(contains("Welcome back, Alice!"));
}

#[test]
fn test_analyze_requires_login() {
    let dir = temp_dir("cli_anonymous");
    let d = dir_arg(&dir);

    scope()
        .args(["--data-dir", &d, "--test", "init"])
        .assert()
        .success();
    write_fixture_model(&dir);

    scope()
        .args(analyze_args(&d, &[POSITIVE_ENTRY]))
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    scope()
        .args(["--data-dir", &d, "history"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_incomplete_entries_write_nothing() {
    let dir = temp_dir("cli_incomplete");
    let d = dir_arg(&dir);
    init_with_user(&dir, "alice", "Alice");

    let mut args = analyze_args(&d, &[POSITIVE_ENTRY, "   "]);
    args.extend(["--count", "2"]);

    scope()
        .args(&args)
        .assert()
        .success()
        .stdout(contains("Please fill in all the journal entries"));

    assert!(!dir.join("logs").join("alice.csv").exists());
}

#[test]
fn test_too_many_entries_rejected() {
    let dir = temp_dir("cli_too_many");
    let d = dir_arg(&dir);
    init_with_user(&dir, "alice", "Alice");

    let entries = [POSITIVE_ENTRY; 6];
    scope()
        .args(analyze_args(&d, &entries))
        .assert()
        .failure()
        .stderr(contains("Too many entries"));
}

#[test]
fn test_analyze_appends_to_log() {
    let dir = temp_dir("cli_analyze");
    let d = dir_arg(&dir);
    init_with_user(&dir, "alice", "Alice");

    scope()
        .args(analyze_args(&d, &[POSITIVE_ENTRY, NEGATIVE_ENTRY]))
        .assert()
        .success()
        .stdout(contains("Prediction Score (Schizophrenia-like):"))
        .stdout(contains("Entry-wise Analysis"))
        .stdout(contains("Entry 1:"))
        .stdout(contains("Entry 2:"));

    let log = fs::read_to_string(dir.join("logs").join("alice.csv")).unwrap();
    let lines: Vec<&str> = log.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "timestamp,mood,help_status,entry,probability,prediction"
    );
    assert!(lines[1].contains(POSITIVE_ENTRY));
    assert!(lines[2].contains(NEGATIVE_ENTRY));
    // both rows carry the batch verdict
    assert!(lines[1].ends_with("Schizophrenic-like"));
    assert!(lines[2].ends_with("Schizophrenic-like"));

    // second batch appends without repeating the header
    scope()
        .args(analyze_args(&d, &[NEGATIVE_ENTRY]))
        .assert()
        .success()
        .stdout(contains("Control-like"));

    let log = fs::read_to_string(dir.join("logs").join("alice.csv")).unwrap();
    assert_eq!(log.lines().count(), 4);
    assert_eq!(log.matches("timestamp,mood").count(), 1);
}

#[test]
fn test_analyze_from_file() {
    let dir = temp_dir("cli_from_file");
    let d = dir_arg(&dir);
    init_with_user(&dir, "alice", "Alice");

    let file = dir.join("entries.txt");
    fs::write(&file, format!("{POSITIVE_ENTRY}\n\n{NEGATIVE_ENTRY}\n")).unwrap();
    let f = dir_arg(&file);

    scope()
        .args([
            "--data-dir",
            &d,
            "analyze",
            "--mood",
            "happy",
            "--help-status",
            "prefer-not-to-say",
            "--from-file",
            &f,
        ])
        .assert()
        .success()
        .stdout(contains("Analyzing 2 journal entries"));

    let log = fs::read_to_string(dir.join("logs").join("alice.csv")).unwrap();
    assert_eq!(log.lines().count(), 3);
    assert!(log.contains("Prefer not to say"));
}

#[test]
fn test_history_newest_first() {
    let dir = temp_dir("cli_history");
    let d = dir_arg(&dir);
    init_with_user(&dir, "alice", "Alice");

    scope()
        .args(["--data-dir", &d, "history"])
        .assert()
        .success()
        .stdout(contains("No logs found yet"));

    scope()
        .args(analyze_args(&d, &[POSITIVE_ENTRY]))
        .assert()
        .success();
    scope()
        .args(analyze_args(&d, &[NEGATIVE_ENTRY]))
        .assert()
        .success();

    let out = scope()
        .args(["--data-dir", &d, "history"])
        .assert()
        .success()
        .stdout(contains("2 rows (2 total)"))
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8_lossy(&out);

    let newer = out.find("Had coffee").expect("negative entry listed");
    let older = out.find("The voices").expect("positive entry listed");
    assert!(newer < older);

    scope()
        .args(["--data-dir", &d, "history", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("1 rows (2 total)"));
}

#[test]
fn test_export_copies_log() {
    let dir = temp_dir("cli_export");
    let d = dir_arg(&dir);
    init_with_user(&dir, "alice", "Alice");
    let out_dir = dir.join("out");
    let o = dir_arg(&out_dir);

    scope()
        .args(["--data-dir", &d, "export", "--dir", &o])
        .assert()
        .success()
        .stdout(contains("No logs available to download"));
    assert!(!out_dir.join("alice_scope_log.csv").exists());

    scope()
        .args(analyze_args(&d, &[POSITIVE_ENTRY, NEGATIVE_ENTRY]))
        .assert()
        .success();

    scope()
        .args(["--data-dir", &d, "export", "--dir", &o])
        .assert()
        .success();

    let exported = fs::read(out_dir.join("alice_scope_log.csv")).unwrap();
    let log = fs::read(dir.join("logs").join("alice.csv")).unwrap();
    assert_eq!(exported, log);

    scope()
        .args(["--data-dir", &d, "export", "--format", "json", "--dir", &o])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("alice_scope_log.json")).unwrap())
            .unwrap();
    assert_eq!(json.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn test_trend_chart() {
    let dir = temp_dir("cli_trend");
    let d = dir_arg(&dir);
    init_with_user(&dir, "alice", "Alice");

    scope()
        .args(["--data-dir", &d, "trend"])
        .assert()
        .success()
        .stdout(contains("No data available yet to show trends."));

    scope()
        .args(analyze_args(&d, &[POSITIVE_ENTRY]))
        .assert()
        .success();

    scope()
        .args(["--data-dir", &d, "trend", "--width", "20", "--height", "4", "--table"])
        .assert()
        .success()
        .stdout(contains("Mental Health Prediction Trend"))
        .stdout(contains("100 ┤"))
        .stdout(contains("1 points"))
        .stdout(contains("probability"));
}

#[test]
fn test_missing_model_aborts_analyze() {
    let dir = temp_dir("cli_missing_model");
    let d = dir_arg(&dir);

    scope()
        .args(["--data-dir", &d, "--test", "init"])
        .assert()
        .success();
    scope()
        .args(["--data-dir", &d, "login", "alice", "--name", "Alice"])
        .assert()
        .success();

    scope()
        .args(analyze_args(&d, &[POSITIVE_ENTRY]))
        .assert()
        .failure()
        .stderr(contains("Failed to load model artifacts"));

    assert!(!dir.join("logs").join("alice.csv").exists());
}

#[test]
fn test_user_override() {
    let dir = temp_dir("cli_user_override");
    let d = dir_arg(&dir);
    init_with_user(&dir, "alice", "Alice");

    scope()
        .args(["--data-dir", &d, "logout"])
        .assert()
        .success();

    scope()
        .args(["--data-dir", &d, "--user", "alice", "whoami"])
        .assert()
        .success()
        .stdout(contains("Logged in as Alice (alice)"));

    scope()
        .args(["--data-dir", &d, "--user", "ghost", "history"])
        .assert()
        .failure()
        .stderr(contains("Unknown user: ghost"));
}

#[test]
fn test_model_info_and_audit_log() {
    let dir = temp_dir("cli_model_info");
    let d = dir_arg(&dir);
    init_with_user(&dir, "alice", "Alice");

    scope()
        .args(["--data-dir", &d, "model", "--info"])
        .assert()
        .success()
        .stdout(contains("logistic_regression"))
        .stdout(contains("Features        : 10"));

    scope()
        .args(["--data-dir", &d, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("login"));
}

#[test]
fn test_login_rejects_path_like_user_id() {
    let dir = temp_dir("cli_bad_user_id");
    let d = dir_arg(&dir);

    scope()
        .args(["--data-dir", &d, "--test", "init"])
        .assert()
        .success();

    scope()
        .args(["--data-dir", &d, "login", "../escaped", "--name", "Mallory"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    assert!(!dir.join("session.yml").exists());
}
