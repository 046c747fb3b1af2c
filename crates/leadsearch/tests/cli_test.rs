//! Integration tests for the `leadsearch` CLI binary.
//!
//! Lookups run against a wiremock registry; nothing here touches the
//! public API or the user's real configuration.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

const NO_CONFIG: &str = "/tmp/leadsearch-cli-test-nonexistent/config.toml";

/// Build a [`Command`] for the `leadsearch` binary with env isolation.
fn leadsearch_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("leadsearch");
    cmd.env("HOME", "/tmp/leadsearch-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/leadsearch-cli-test-nonexistent")
        .env("LEADSEARCH_CONFIG", NO_CONFIG)
        .env("NO_COLOR", "1")
        .env_remove("LEADSEARCH_BASE_URL")
        .env_remove("LEADSEARCH_OUTPUT")
        .env_remove("LEADSEARCH_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

async fn registry() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cnpj/11222333000181"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cnpj": "11222333000181",
            "logradouro": "RUA DAS FLORES",
            "numero": "100",
            "municipio": "SAO PAULO",
            "uf": "SP",
            "atividade_principal": [{ "text": "Comércio varejista" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cnpj/00000000000000"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "detalhes": "CNPJ não encontrado"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cnpj/99999999999999"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    server
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = leadsearch_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_lists_commands() {
    leadsearch_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("lookup")
            .and(predicate::str::contains("stats"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version_flag() {
    leadsearch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("leadsearch"));
}

#[test]
fn test_completions_zsh() {
    leadsearch_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_invalid_filter_value() {
    let output = leadsearch_cmd()
        .args(["lookup", "--filter", "nome", "123"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("possible values"));
}

// ── Lookup: local rejections ────────────────────────────────────────

#[test]
fn test_lookup_short_cnpj_is_rejected() {
    leadsearch_cmd()
        .args(["lookup", "123"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Por favor, insira um CNPJ válido com 14 dígitos.",
        ));
}

#[test]
fn test_lookup_other_filters_are_unsupported() {
    for filter in ["todos", "razao", "legal-name"] {
        leadsearch_cmd()
            .args(["lookup", "-f", filter, "ACME"])
            .assert()
            .code(5)
            .stderr(predicate::str::contains(
                "Apenas a busca por CNPJ está implementada no momento.",
            ));
    }
}

// ── Lookup: against a mock registry ─────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_table_renders_placeholders() {
    let server = registry().await;
    let mut cmd = leadsearch_cmd();
    cmd.args(["--base-url", &server.uri(), "lookup", "11.222.333/0001-81"]);

    let output = run(cmd).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(stdout.contains("Razão Social não disponível"));
    assert!(stdout.contains("RUA DAS FLORES, 100, SAO PAULO - SP"));
    assert!(stdout.contains("Comércio varejista"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_json_emits_raw_record() {
    let server = registry().await;
    let mut cmd = leadsearch_cmd();
    cmd.env("LEADSEARCH_BASE_URL", server.uri())
        .args(["-o", "json", "lookup", "11222333000181"]);

    let output = run(cmd).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["cnpj"], "11222333000181");
    assert_eq!(value["razao_social"], serde_json::Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_plain_prints_cnpj() {
    let server = registry().await;
    let mut cmd = leadsearch_cmd();
    cmd.args(["--base-url", &server.uri(), "-o", "plain", "lookup", "11222333000181"]);

    let output = run(cmd).await;
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "11222333000181");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_not_found_exit_code() {
    let server = registry().await;
    let mut cmd = leadsearch_cmd();
    cmd.args(["--base-url", &server.uri(), "lookup", "00.000.000/0000-00"]);

    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(7));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Erro na busca. Verifique o CNPJ e tente novamente.")
    );
    assert!(output.stdout.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_failures_share_exit_code_and_help() {
    let server = registry().await;

    let mut not_found = leadsearch_cmd();
    not_found.args(["--base-url", &server.uri(), "lookup", "00000000000000"]);
    let not_found = run(not_found).await;

    let mut unavailable = leadsearch_cmd();
    unavailable.args(["--base-url", &server.uri(), "lookup", "99999999999999"]);
    let unavailable = run(unavailable).await;

    assert_eq!(not_found.status.code(), unavailable.status.code());
    let stderr = |o: &std::process::Output| {
        String::from_utf8_lossy(&o.stderr).replace(&server.uri(), "<registry>")
    };
    assert_eq!(stderr(&not_found), stderr(&unavailable));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_failure_hides_upstream_detail() {
    let server = registry().await;
    let mut cmd = leadsearch_cmd();
    cmd.args(["--base-url", &server.uri(), "lookup", "00000000000000"]);

    let output = run(cmd).await;
    let stderr = String::from_utf8_lossy(&output.stderr).replace(&server.uri(), "<registry>");
    assert!(stderr.contains("Erro na busca."), "{stderr}");
    assert!(!stderr.contains("CNPJ não encontrado"), "{stderr}");
    assert!(!stderr.contains("404"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lookup_server_error_exit_code() {
    let server = registry().await;
    let mut cmd = leadsearch_cmd();
    cmd.args(["--base-url", &server.uri(), "lookup", "99999999999999"]);

    let output = run(cmd).await;
    assert_eq!(output.status.code(), Some(7));
    assert!(combined_output(&output).contains("Erro na busca."));
}

// ── Stats ───────────────────────────────────────────────────────────

#[test]
fn test_stats_json() {
    let output = leadsearch_cmd().args(["stats", "-o", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], "63.328.558");
    assert_eq!(value["states"].as_array().map(Vec::len), Some(8));
}

#[test]
fn test_stats_table() {
    leadsearch_cmd().arg("stats").assert().success().stdout(
        predicate::str::contains("EMPRESAS CADASTRADAS")
            .and(predicate::str::contains("Distribuição por Estado"))
            .and(predicate::str::contains("2.748.553")),
    );
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_override() {
    leadsearch_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(NO_CONFIG));
}

#[test]
fn test_config_set_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("leadsearch/config.toml");

    leadsearch_cmd()
        .env("LEADSEARCH_CONFIG", &config)
        .args(["config", "set", "api.base_url", "http://127.0.0.1:9/"])
        .assert()
        .success();

    leadsearch_cmd()
        .env("LEADSEARCH_CONFIG", &config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url = \"http://127.0.0.1:9/\""));
}

#[test]
fn test_config_set_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    leadsearch_cmd()
        .env("LEADSEARCH_CONFIG", dir.path().join("config.toml"))
        .args(["config", "set", "api.token", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("api.base_url"));
}
