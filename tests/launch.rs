//! Launcher integration tests.
//!
//! Exercises the real spawn/wait path against a stub server script that
//! records its argv and exits with a fixed code.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use api_launcher::process::{ServerCommand, ServerProcess};

fn write_stub_server(dir: &Path, exit_code: i32) -> PathBuf {
    let argv_file = dir.join("argv.txt");
    let script = dir.join("stub-server.sh");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"$@\" > '{}'\nexit {}\n",
            argv_file.display(),
            exit_code
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[tokio::test]
async fn test_server_receives_argv_and_exit_code_is_adopted() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_stub_server(dir.path(), 7);

    let command = ServerCommand::new(script.to_str().unwrap(), "api:app", "0.0.0.0", "3000");
    let status = ServerProcess::spawn(&command).unwrap().wait().await.unwrap();

    assert_eq!(status.code(), Some(7));
    let argv = fs::read_to_string(dir.path().join("argv.txt")).unwrap();
    assert_eq!(argv.trim(), "api:app --host 0.0.0.0 --port 3000");
}

#[tokio::test]
async fn test_malformed_port_reaches_server_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_stub_server(dir.path(), 0);

    let command = ServerCommand::new(script.to_str().unwrap(), "api:app", "0.0.0.0", "not-a-port");
    let status = ServerProcess::spawn(&command).unwrap().wait().await.unwrap();

    assert!(status.success());
    let argv = fs::read_to_string(dir.path().join("argv.txt")).unwrap();
    assert_eq!(argv.trim(), "api:app --host 0.0.0.0 --port not-a-port");
}

#[tokio::test]
async fn test_missing_server_program_surfaces_spawn_error() {
    let command = ServerCommand::new("/nonexistent/uvicorn", "api:app", "0.0.0.0", "8000");
    let err = match ServerProcess::spawn(&command) {
        Ok(_) => panic!("spawn should fail for a missing program"),
        Err(err) => err,
    };
    assert!(err.to_string().contains("/nonexistent/uvicorn"));
}
