//! Process-level startup behavior of the server binary.

use std::process::{Command, Output};

mod common;

fn run_binary(config: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mock-api-server"))
        .arg("--config")
        .arg(config)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_invalid_method_exits_before_binding() {
    let (_dir, config) = common::scratch_config(
        r#"
        port = 0

        [[apis]]
        url = "/user"
        method = "options"
        type = "mock"
        data = "x"
        "#,
    );

    let output = run_binary(&config);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("`options`"), "{stdout}");
    assert!(stdout.contains("get, post, put, delete, patch"), "{stdout}");
    assert!(!stdout.contains("Listening"), "{stdout}");
}

#[test]
fn test_invalid_type_exits_before_binding() {
    let (_dir, config) = common::scratch_config(
        r#"
        port = 0

        [[apis]]
        url = "/user"
        method = "get"
        type = "proxy"
        data = "x"
        "#,
    );

    let output = run_binary(&config);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("file, mock"), "{stdout}");
    assert!(!stdout.contains("[APIURL_LIST]"), "{stdout}");
}

#[test]
fn test_port_in_use_exits_with_message() {
    let taken = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let (_dir, config) = common::scratch_config(&format!(
        r#"
        port = {port}

        [[apis]]
        url = "/user"
        method = "get"
        type = "mock"
        data = "x"
        "#
    ));

    let output = run_binary(&config);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[APIURL_LIST]"), "{stdout}");
    assert!(stdout.contains("GET - /user"), "{stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("Port {port} is already in use")),
        "{stderr}"
    );
    drop(taken);
}
