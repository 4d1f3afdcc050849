use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn cmd() -> Command {
    Command::cargo_bin("flowlint").unwrap()
}

mod clean_flows {
    use super::*;

    #[test]
    fn test_clean_directory_passes() {
        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("clean"))
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found in 1 flow scanned."));
    }

    #[test]
    fn test_empty_directory_passes_with_zero_flows() {
        let dir = tempfile::TempDir::new().unwrap();
        cmd()
            .arg("--directory")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found in 0 flows scanned."));
    }

    #[test]
    fn test_empty_directory_passes_for_every_threshold() {
        let dir = tempfile::TempDir::new().unwrap();
        for threshold in ["error", "warning", "note", "never"] {
            cmd()
                .arg("--directory")
                .arg(dir.path())
                .args(["--fail-on", threshold])
                .assert()
                .success();
        }
    }
}

mod dirty_flows {
    use super::*;

    #[test]
    fn test_dirty_directory_fails_default_threshold() {
        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("dirty"))
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Legacy Sync (Flow)"))
            .stdout(predicate::str::contains("[error]"))
            .stdout(predicate::str::contains("Inactive Flow"))
            .stdout(predicate::str::contains("Missing Fault Path"));
    }

    #[test]
    fn test_fail_on_never_always_passes() {
        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("dirty"))
            .args(["--fail-on", "never"])
            .assert()
            .success();
    }

    #[test]
    fn test_explicit_file_list_is_scanned_verbatim() {
        cmd()
            .arg("--files")
            .arg(fixtures_path().join("dirty/Legacy_Sync.flow-meta.xml"))
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("Legacy Sync"));
    }

    #[test]
    fn test_report_lists_copied_element_and_hardcoded_id() {
        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("dirty"))
            .assert()
            .failure()
            .stdout(predicate::str::contains("Copy_1_of_Set_Owner"))
            .stdout(predicate::str::contains("005Ab000001Cd2E"));
    }
}

mod json_output {
    use super::*;

    #[test]
    fn test_json_summary_shape() {
        let output = cmd()
            .arg("--directory")
            .arg(fixtures_path().join("dirty"))
            .args(["--format", "json"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["flowsNumber"], 1);
        assert!(parsed["results"].as_u64().unwrap() > 0);
        assert!(parsed["errorLevelsDetails"]["error"].as_u64().unwrap() > 0);
        assert_eq!(
            parsed["results"].as_u64().unwrap() as usize,
            parsed["issues"].as_array().unwrap().len()
        );
    }

    #[test]
    fn test_json_zero_flow_summary() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = cmd()
            .arg("--directory")
            .arg(dir.path())
            .args(["--format", "json"])
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(0));
        let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed["flowsNumber"], 0);
        assert_eq!(parsed["results"], 0);
    }

    #[test]
    fn test_output_flag_writes_report_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let report_path = dir.path().join("report.json");

        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("clean"))
            .args(["--format", "json"])
            .arg("--output")
            .arg(&report_path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Report written to"));

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(parsed["flowsNumber"], 1);
    }
}

mod configuration {
    use super::*;

    fn downgrade_config(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("flowlint.yaml");
        let body = "rules:\n".to_string()
            + &[
                "missing-flow-description",
                "inactive-flow-status",
                "outdated-api-version",
                "hardcoded-record-id",
                "copy-api-name",
                "missing-fault-path",
            ]
            .map(|rule| format!("  {rule}:\n    severity: warning\n"))
            .join("");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_downgraded_severities_pass_error_threshold() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = downgrade_config(dir.path());

        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("dirty"))
            .arg("--config")
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("[warning]"));
    }

    #[test]
    fn test_downgraded_severities_fail_warning_threshold() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = downgrade_config(dir.path());

        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("dirty"))
            .arg("--config")
            .arg(&config)
            .args(["--fail-on", "warning"])
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn test_missing_config_file_is_fatal() {
        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("clean"))
            .args(["--config", "/nonexistent/.flowlint.yaml"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Configuration error"));
    }

    #[test]
    fn test_remote_custom_rule_is_blocked() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = dir.path().join("flowlint.yaml");
        fs::write(
            &config,
            "custom_rules:\n  - name: remote-rule\n    source: https://example.com/rules.yaml\n",
        )
        .unwrap();

        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("clean"))
            .arg("--config")
            .arg(&config)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Remote rule modules are disabled"));
    }

    #[test]
    fn test_inline_custom_rule_is_blocked() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = dir.path().join("flowlint.yaml");
        fs::write(
            &config,
            "custom_rules:\n  - name: inline-rule\n    expression: \"flow.label == null\"\n",
        )
        .unwrap();

        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("clean"))
            .arg("--config")
            .arg(&config)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Dynamic rule code is disabled"));
    }

    #[test]
    fn test_local_declarative_custom_rule_runs() {
        let dir = tempfile::TempDir::new().unwrap();
        let rule = dir.path().join("no-draft.yaml");
        fs::write(
            &rule,
            "label: No Draft Marker\ndescription: flags draft status lines\npatterns:\n  - '<status>Draft</status>'\n",
        )
        .unwrap();
        let config = dir.path().join("flowlint.yaml");
        fs::write(
            &config,
            format!(
                "custom_rules:\n  - name: no-draft\n    source: {}\n    severity: note\n",
                rule.display()
            ),
        )
        .unwrap();

        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("dirty"))
            .arg("--config")
            .arg(&config)
            .args(["--fail-on", "never"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No Draft Marker"));
    }
}

mod flag_validation {
    use super::*;

    #[test]
    fn test_directory_conflicts_with_files() {
        cmd()
            .arg("--directory")
            .arg(fixtures_path().join("clean"))
            .arg("--files")
            .arg(fixtures_path().join("dirty/Legacy_Sync.flow-meta.xml"))
            .assert()
            .failure()
            .code(2);
    }

    #[test]
    fn test_retrieve_requires_target_org() {
        cmd().arg("--retrieve").assert().failure().code(2);
    }
}

mod fatal_errors {
    use super::*;

    #[test]
    fn test_unparsable_flow_is_engine_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("Broken.flow-meta.xml"), "not a flow").unwrap();

        cmd()
            .arg("--directory")
            .arg(dir.path())
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Scan engine failure"));
    }

    #[test]
    fn test_missing_explicit_file_is_engine_failure() {
        cmd()
            .arg("--files")
            .arg("/nonexistent/Flow.flow-meta.xml")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Scan engine failure"));
    }
}
