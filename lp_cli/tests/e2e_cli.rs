//! End-to-end tests for the `lpr` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn lpr() -> Command {
    let mut cmd = cargo_bin_cmd!("lpr");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A snapshot whose sections all pass validation.
const VALID_SNAPSHOT: &str = r##"{
  "account": { "id": "a", "name": "Acme" },
  "page": { "id": "p", "account_id": "a", "slug": "home", "title": "Home" },
  "sections": [
    {
      "id": "cta", "lp_id": "p", "section_type": "ctaFinal", "order_index": 1,
      "content_json": { "title": "Ready?", "button": { "text": "Call us", "href": "tel:+15551234" } }
    }
  ]
}"##;

// ============================================
// Basic CLI
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        lpr()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("validate"))
            .stdout(predicate::str::contains("migrate-branding"));
    }

    #[test]
    fn shows_version() {
        lpr()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        lpr()
            .args(["render", "does-not-exist.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read snapshot"));
    }
}

// ============================================
// render
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_html_to_stdout() {
        lpr()
            .arg("render")
            .arg(fixture("clinic.json"))
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("<title>Implantes Dentarios</title>"))
            .stdout(predicate::str::contains("Sorria de novo"))
            .stdout(predicate::str::contains("Perguntas frequentes"))
            .stdout(predicate::str::contains("Antes e depois").not())
            .stdout(predicate::str::contains("Black Friday").not());
    }

    #[test]
    fn legacy_branding_is_applied() {
        lpr()
            .arg("render")
            .arg(fixture("clinic.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains(
                r#"src="https://cdn.example.com/sorriso/logo.png""#,
            ))
            .stdout(predicate::str::contains("background-color:#0f766e;color:#f8fafc"))
            .stdout(predicate::str::contains("background-color:#ffffff;color:#f8fafc"));
    }

    #[test]
    fn skipped_sections_are_logged_to_stderr() {
        lpr()
            .arg("render")
            .arg(fixture("clinic.json"))
            .assert()
            .success()
            .stderr(predicate::str::contains("promo"));
    }

    #[test]
    fn strict_mode_fails_on_skipped_sections() {
        lpr()
            .arg("render")
            .arg(fixture("clinic.json"))
            .arg("--strict")
            .assert()
            .failure()
            .stderr(predicate::str::contains("strict mode: promo"));
    }

    #[test]
    fn writes_output_file_with_lang_and_css() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("page.html");
        let css = dir.path().join("brand.css");
        fs::write(&css, ".lp-hero { min-height: 90vh; }").unwrap();

        lpr()
            .arg("render")
            .arg(fixture("clinic.json"))
            .arg("-o")
            .arg(&out)
            .args(["--lang", "en"])
            .arg("--extra-css")
            .arg(&css)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains(r#"<html lang="en""#));
        assert!(html.contains(".lp-hero { min-height: 90vh; }"));
    }

    #[test]
    fn config_file_supplies_defaults() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("lpr.yaml");
        fs::write(&config, "lang: es\nstrict: true\n").unwrap();

        lpr()
            .arg("render")
            .arg(fixture("clinic.json"))
            .arg("--config")
            .arg(&config)
            .assert()
            .failure()
            .stdout(predicate::str::contains(r#"<html lang="es""#));
    }

    #[test]
    fn no_strict_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("lpr.toml");
        fs::write(&config, "strict = true\n").unwrap();

        lpr()
            .arg("render")
            .arg(fixture("clinic.json"))
            .arg("--config")
            .arg(&config)
            .arg("--no-strict")
            .assert()
            .success()
            .stdout(predicate::str::contains("<!DOCTYPE html>"));
    }

    #[test]
    fn strict_and_no_strict_conflict() {
        lpr()
            .args(["render", "--strict", "--no-strict"])
            .arg(fixture("clinic.json"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
    }

    #[test]
    fn sections_of_other_pages_are_reported() {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join("stray.json");
        fs::write(
            &snapshot,
            VALID_SNAPSHOT.replace(r#""lp_id": "p""#, r#""lp_id": "p-old""#),
        )
        .unwrap();

        lpr()
            .arg("render")
            .arg(&snapshot)
            .assert()
            .success()
            .stdout(predicate::str::contains("Ready?").not())
            .stderr(predicate::str::contains("section belongs to another page"));
    }

    #[test]
    fn unpublished_pages_are_refused() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.json");
        let mut snapshot: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(fixture("clinic.json")).unwrap()).unwrap();
        snapshot["page"]["active"] = serde_json::Value::Bool(false);
        fs::write(&path, snapshot.to_string()).unwrap();

        lpr()
            .arg("render")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("page 'implantes' is not published"));
    }
}

// ============================================
// validate
// ============================================

mod validate {
    use super::*;

    #[test]
    fn reports_every_issue_and_fails() {
        lpr()
            .arg("validate")
            .arg(fixture("clinic.json"))
            .assert()
            .code(1)
            .stdout(predicate::str::contains("promo (banner): section_type: unknown section type"))
            .stdout(predicate::str::contains("hero (hero)").not())
            .stdout(predicate::str::contains("old-gallery (gallery): images: required field is missing"))
            .stdout(predicate::str::contains("2 of 6 section(s) invalid"));
    }

    #[test]
    fn clean_snapshot_passes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("valid.json");
        fs::write(&path, VALID_SNAPSHOT).unwrap();

        lpr()
            .arg("validate")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("1 section(s) valid"));
    }
}

// ============================================
// migrate-branding
// ============================================

mod migrate_branding {
    use super::*;

    #[test]
    fn rewrites_legacy_branding() {
        let output = lpr()
            .arg("migrate-branding")
            .arg(fixture("clinic.json"))
            .assert()
            .success()
            .stderr(predicate::str::contains("branding: migrated"))
            .get_output()
            .stdout
            .clone();

        let migrated: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let account = &migrated["account"];
        assert!(account.get("palette").is_none());
        assert!(account.get("logo_url").is_none());
        assert_eq!(account["branding_config"]["version"], 2);
        assert_eq!(account["branding_config"]["colors"]["primary"], "#0f766e");
        assert_eq!(
            account["branding_config"]["logo"]["url"],
            "https://cdn.example.com/sorriso/logo.png"
        );
    }

    #[test]
    fn migrated_snapshot_renders_the_same_branding() {
        let dir = TempDir::new().unwrap();
        let migrated = dir.path().join("migrated.json");

        lpr()
            .arg("migrate-branding")
            .arg(fixture("clinic.json"))
            .arg("-o")
            .arg(&migrated)
            .assert()
            .success();

        lpr()
            .arg("render")
            .arg(&migrated)
            .assert()
            .success()
            .stdout(predicate::str::contains("background-color:#0f766e;color:#f8fafc"))
            .stdout(predicate::str::contains(
                r#"src="https://cdn.example.com/sorriso/logo.png""#,
            ));
    }

    #[test]
    fn accounts_without_branding_are_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("valid.json");
        fs::write(&path, VALID_SNAPSHOT).unwrap();

        lpr()
            .arg("migrate-branding")
            .arg(&path)
            .assert()
            .success()
            .stderr(predicate::str::contains("branding: no-branding"));
    }
}
