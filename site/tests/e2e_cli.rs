//! End-to-end CLI tests for tiffany

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn tiffany() -> Command {
    cargo_bin_cmd!("tiffany")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        tiffany()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        tiffany()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        tiffany().assert().failure();
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_default_page_to_stdout() {
        tiffany()
            .args(["render", "--year", "2030"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("© 2030 A Tiffany Affair and Design"))
            .stdout(predicate::str::contains("/images/portfolio-6.jpg"));
    }

    #[test]
    fn writes_page_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("index.html");

        tiffany()
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<figure").count(), 6);
    }

    #[test]
    fn renders_custom_content() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content.json");
        std::fs::write(
            &content,
            r#"{ "services": { "items": [ { "title": "Floral Design", "description": "Blooms." } ] } }"#,
        )
        .unwrap();

        tiffany()
            .args(["render", "--content"])
            .arg(&content)
            .assert()
            .success()
            .stdout(predicate::str::contains("Floral Design"))
            .stdout(predicate::str::contains("Décor Rentals").not());
    }

    #[test]
    fn fails_on_missing_content_file() {
        let dir = TempDir::new().unwrap();

        tiffany()
            .args(["render", "--content"])
            .arg(dir.path().join("nope.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load content"));
    }
}

// ============================================
// Content & Check Tests
// ============================================

mod content {
    use super::*;

    #[test]
    fn dumps_default_content_as_json() {
        let output = tiffany().arg("content").output().unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["services"]["items"].as_array().unwrap().len(), 3);
        assert_eq!(json["portfolio"]["items"][0]["index"], 1);
    }

    #[test]
    fn dumped_content_passes_check() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        let output = tiffany().arg("content").output().unwrap();
        std::fs::write(&path, &output.stdout).unwrap();

        tiffany()
            .args(["check", "--content"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("ok"));
    }

    #[test]
    fn check_rejects_duplicate_portfolio_index() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(
            &path,
            r#"{ "portfolio": { "items": [
                { "index": 2, "caption": "A", "meta": "a" },
                { "index": 2, "caption": "B", "meta": "b" }
            ] } }"#,
        )
        .unwrap();

        tiffany()
            .args(["check", "--content"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate portfolio item index 2"));
    }

    #[test]
    fn check_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "{ broken").unwrap();

        tiffany()
            .args(["check", "--content"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid content JSON"));
    }
}
