#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::json;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn scope() -> Command {
    cargo_bin_cmd!("scope")
}

/// Fresh, empty directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("scope_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn dir_arg(dir: &Path) -> String {
    dir.to_string_lossy().to_string()
}

/// Words the fixture model treats as schizophrenia-like markers.
pub const POSITIVE_WORDS: [&str; 5] = ["voices", "watching", "signals", "transmit", "implanted"];
/// Words the fixture model treats as control markers.
pub const NEGATIVE_WORDS: [&str; 5] = ["coffee", "friends", "walk", "park", "work"];

pub fn fixture_vectorizer() -> serde_json::Value {
    let mut vocabulary = serde_json::Map::new();
    for (i, w) in POSITIVE_WORDS.iter().chain(NEGATIVE_WORDS.iter()).enumerate() {
        vocabulary.insert(w.to_string(), json!(i));
    }
    json!({
        "vocabulary": vocabulary,
        "norm": null
    })
}

/// Logistic regression: +2 per marker word, -2 per control word.
pub fn fixture_model() -> serde_json::Value {
    let coef: Vec<f64> = POSITIVE_WORDS
        .iter()
        .map(|_| 2.0)
        .chain(NEGATIVE_WORDS.iter().map(|_| -2.0))
        .collect();
    json!({
        "kind": "logistic_regression",
        "classes": [0, 1],
        "coef": coef,
        "intercept": 0.0
    })
}

/// Write the fixture artifacts into `{data_dir}/models`.
pub fn write_fixture_model(data_dir: &Path) {
    let models = data_dir.join("models");
    fs::create_dir_all(&models).expect("create models dir");
    fs::write(
        models.join("model.json"),
        serde_json::to_string_pretty(&fixture_model()).unwrap(),
    )
    .expect("write model.json");
    fs::write(
        models.join("vectorizer.json"),
        serde_json::to_string_pretty(&fixture_vectorizer()).unwrap(),
    )
    .expect("write vectorizer.json");
}

/// Initialize a data dir, install the fixture model and log `user_id` in.
pub fn init_with_user(data_dir: &Path, user_id: &str, name: &str) {
    let d = dir_arg(data_dir);

    scope()
        .args(["--data-dir", &d, "--test", "init"])
        .assert()
        .success();

    write_fixture_model(data_dir);

    scope()
        .args(["--data-dir", &d, "login", user_id, "--name", name])
        .assert()
        .success();
}

pub const POSITIVE_ENTRY: &str = "The voices keep watching me and the signals never stop";
pub const NEGATIVE_ENTRY: &str = "Had coffee with friends and a long walk in the park";
