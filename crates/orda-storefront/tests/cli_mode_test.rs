use std::io::Write;
use std::process::Command;

#[test]
fn cli_mode_with_config_and_dry_run_works() {
    // Get the path to the binary from Cargo
    let binary_path = env!("CARGO_BIN_EXE_orda");

    let config_path = format!("{}/demos/orda.yaml", env!("CARGO_MANIFEST_DIR"));

    let output = Command::new(binary_path)
        .arg("--config")
        .arg(config_path)
        .arg("--dry-run")
        .arg("--log-level")
        .arg("error")
        .output()
        .expect("Failed to start orda binary");

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_mode_dry_run_without_config_uses_defaults() {
    let output = Command::new(env!("CARGO_BIN_EXE_orda"))
        .arg("--dry-run")
        .arg("--log-level")
        .arg("error")
        .output()
        .expect("Failed to start orda binary");

    assert!(output.status.success());
}

#[test]
fn cli_mode_rejects_invalid_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"location:\n  default_city: Accra, Ghana\n")
        .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_orda"))
        .arg("--config")
        .arg(file.path())
        .arg("--dry-run")
        .arg("--log-level")
        .arg("error")
        .output()
        .expect("Failed to start orda binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load config"), "stderr: {stderr}");
}

#[test]
fn cli_mode_writes_logs_to_directory() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_orda"))
        .arg("--dry-run")
        .arg("--log-dir")
        .arg(dir.path())
        .output()
        .expect("Failed to start orda binary");

    assert!(output.status.success());
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(!entries.is_empty());
}
