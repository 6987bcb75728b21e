//! Config layering: defaults, file, env, then command-line flags.

use handrank_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

const VARS: [&str; 5] = [
    "HANDRANK_CONFIG",
    "HANDRANK_SEED",
    "HANDRANK_PLAYERS",
    "HANDRANK_ROUNDS",
    "HANDRANK_UNICODE",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, out, _) = run_args(&["handrank", "cfg"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    for key in ["seed", "players", "rounds", "unicode"] {
        assert_eq!(json[key]["source"], "default", "{}", key);
    }
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 7\nplayers = 5\nunicode = false").unwrap();
    unsafe {
        std::env::set_var("HANDRANK_CONFIG", file.path());
        std::env::set_var("HANDRANK_SEED", "99");
    }

    let (code, out, _) = run_args(&["handrank", "cfg"]);
    clear_env();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["players"]["value"], 5);
    assert_eq!(json["players"]["source"], "file");
    assert_eq!(json["unicode"]["value"], false);
    assert_eq!(json["rounds"]["source"], "default");
}

#[test]
#[serial]
fn flags_override_config() {
    clear_env();
    unsafe {
        std::env::set_var("HANDRANK_SEED", "5");
        std::env::set_var("HANDRANK_PLAYERS", "2");
    }

    let (code, out, _) = run_args(&["handrank", "deal"]);
    assert_eq!(code, 0);
    assert_eq!(out.lines().next(), Some("Seed: 5"));
    assert_eq!(out.lines().count(), 2 + 2);

    let (code, out, _) = run_args(&["handrank", "deal", "--seed", "6", "--players", "4"]);
    clear_env();
    assert_eq!(code, 0);
    assert_eq!(out.lines().next(), Some("Seed: 6"));
    assert_eq!(out.lines().count(), 2 + 4);
}

#[test]
#[serial]
fn invalid_config_fails_commands() {
    clear_env();
    unsafe {
        std::env::set_var("HANDRANK_ROUNDS", "0");
    }
    let (code, out, err) = run_args(&["handrank", "sim"]);
    let (cfg_code, _, cfg_err) = run_args(&["handrank", "cfg"]);
    clear_env();

    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Configuration error:"));
    assert_eq!(cfg_code, 2);
    assert!(cfg_err.contains("rounds must be >0"));
}

#[test]
#[serial]
fn unknown_file_keys_are_rejected() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "level = 3").unwrap();
    unsafe {
        std::env::set_var("HANDRANK_CONFIG", file.path());
    }
    let (code, _, err) = run_args(&["handrank", "deal", "--seed", "1"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}

#[test]
#[serial]
fn unicode_off_prints_suit_letters() {
    clear_env();
    unsafe {
        std::env::set_var("HANDRANK_UNICODE", "off");
    }
    let (code, out, _) = run_args(&[
        "handrank", "rank", "--player", "AS KH", "--table", "2D 3C 4S 9H 9D",
    ]);
    clear_env();
    assert_eq!(code, 0);
    assert!(out.contains("Player: [AS KH]"));
}

#[test]
#[serial]
fn rank_ignores_config_it_does_not_use() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let args = [
        "handrank", "rank", "--player", "3S 7S", "--table", "2D 4S 5S KC 6S",
    ];

    unsafe {
        std::env::set_var("HANDRANK_ROUNDS", "0");
    }
    let (code, out, err) = run_args(&args);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Category: Straight Flush"));

    unsafe {
        std::env::set_var("HANDRANK_CONFIG", &missing);
    }
    let (code, out, err) = run_args(&args);
    clear_env();
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Category: Straight Flush"));
}

#[test]
#[serial]
fn flags_replace_invalid_env_values() {
    clear_env();
    unsafe {
        std::env::set_var("HANDRANK_PLAYERS", "0");
        std::env::set_var("HANDRANK_ROUNDS", "0");
    }

    let (code, out, err) = run_args(&["handrank", "deal", "--players", "3", "--seed", "1"]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert_eq!(out.lines().count(), 2 + 3);

    let (code, out, err) = run_args(&[
        "handrank", "sim", "--rounds", "4", "--players", "2", "--seed", "1",
    ]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Hands classified: 8"));

    let (code, _, err) = run_args(&["handrank", "deal", "--seed", "1"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("players must be between 1 and 23"));
}

#[test]
#[serial]
fn deal_ignores_invalid_rounds() {
    clear_env();
    unsafe {
        std::env::set_var("HANDRANK_ROUNDS", "0");
    }
    let (code, out, err) = run_args(&["handrank", "deal", "--seed", "8"]);
    clear_env();
    assert_eq!(code, 0, "stderr: {}", err);
    assert_eq!(out.lines().next(), Some("Seed: 8"));
}
