use std::path::Path;
use std::process::{Command, Output};

fn run_octofit(cwd: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_octofit"));
    cmd.args(args)
        .current_dir(cwd)
        .env_remove("DATABASE_URL")
        .env_remove("RUST_LOG");
    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        // Not valid UTF-8, so reading the environment into settings cannot succeed.
        cmd.env("OCTOFIT_UNREADABLE", OsStr::from_bytes(&[0x66, 0xff, 0x6f]));
    }
    cmd.output().expect("run octofit")
}

#[test]
fn help_and_version_do_not_need_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join(".env"), "DATABASE_URL\n=\n'unterminated").expect("write .env");

    let help = run_octofit(dir.path(), &["--help"]);
    assert!(help.status.success(), "--help failed: {}", String::from_utf8_lossy(&help.stderr));
    let stdout = String::from_utf8_lossy(&help.stdout);
    assert!(stdout.contains("populate-db"), "{}", stdout);

    let version = run_octofit(dir.path(), &["--version"]);
    assert!(version.status.success());
    assert!(String::from_utf8_lossy(&version.stdout).starts_with("octofit "));

    assert!(!dir.path().join("octofit.db").exists());
}

#[test]
fn populate_db_prints_only_the_confirmation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("heroes.db").display());

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_octofit"));
    let output = cmd
        .args(["--database-url", &url, "populate-db"])
        .current_dir(dir.path())
        .output()
        .expect("run octofit");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "octofit_db populated with test data.\n");
}
