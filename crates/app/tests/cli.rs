use std::net::TcpListener;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

struct TestEnv {
    tmp: TempDir,
    config_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("shelf");
        Self {
            tmp,
            config_path,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("shelf").unwrap();
        cmd.env("HOME", self.tmp.path())
            .env_remove("RUST_LOG")
            .arg("--config-path")
            .arg(&self.config_path);
        cmd
    }
}

/// A loopback URL with nothing listening behind it
fn dead_catalog_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/books/v1", addr)
}

#[test]
fn routes_lists_table() {
    let env = TestEnv::new();
    env.cmd()
        .arg("routes")
        .assert()
        .success()
        .stdout(contains("/search/:id"))
        .stdout(contains("search-detail"))
        .stdout(contains("SearchDetailView"));
}

#[test]
fn library_redirects_without_token() {
    let env = TestEnv::new();
    env.cmd()
        .args(["navigate", "/library"])
        .assert()
        .success()
        .stdout(contains("redirect: /library -> /login"));
}

#[test]
fn library_proceeds_after_login() {
    let env = TestEnv::new();
    env.cmd()
        .args(["session", "login", "--token", "tok"])
        .assert()
        .success()
        .stdout(contains("Logged in"));

    env.cmd()
        .args(["navigate", "/library"])
        .assert()
        .success()
        .stdout(contains("proceed: library (LibraryView)"));

    env.cmd()
        .args(["session", "status"])
        .assert()
        .success()
        .stdout(contains("logged in"));

    env.cmd()
        .args(["session", "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    env.cmd()
        .args(["navigate", "/library"])
        .assert()
        .success()
        .stdout(contains("redirect: /library -> /login"));
}

#[test]
fn public_routes_never_redirect() {
    let env = TestEnv::new();
    for path in ["/", "/login", "/register"] {
        env.cmd()
            .args(["navigate", path])
            .assert()
            .success()
            .stdout(contains("proceed:"));
    }
}

#[test]
fn detail_route_binds_id() {
    let env = TestEnv::new();
    env.cmd()
        .args(["session", "login", "--token", "tok"])
        .assert()
        .success();

    env.cmd()
        .args(["navigate", "/search/abc123"])
        .assert()
        .success()
        .stdout(contains("proceed: search-detail (SearchDetailView)"))
        .stdout(contains("id: abc123"));
}

#[test]
fn unknown_path_is_not_found() {
    let env = TestEnv::new();
    env.cmd()
        .args(["navigate", "/shelves"])
        .assert()
        .success()
        .stdout(contains("not found: /shelves"));
}

#[test]
fn empty_token_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["session", "login", "--token", ""])
        .assert()
        .failure()
        .stderr(contains("token must not be empty"));
}

#[test]
fn init_twice_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["init", "--with-catalog-url", "http://localhost:9999/books/v1"])
        .assert()
        .success()
        .stdout(contains("Catalog URL: http://localhost:9999/books/v1"));

    env.cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already initialized"));
}

#[test]
fn unreachable_catalog_yields_empty_results() {
    let env = TestEnv::new();
    let catalog_url = dead_catalog_url();

    env.cmd()
        .args(["--catalog-url", &catalog_url, "book", "show", "abc123"])
        .assert()
        .success()
        .stdout(contains("No book found"));

    env.cmd()
        .args(["--catalog-url", &catalog_url, "book", "search", "rust"])
        .assert()
        .success()
        .stdout(contains("No books found"));
}

#[test]
fn strict_mode_reports_catalog_failures() {
    let env = TestEnv::new();
    let catalog_url = dead_catalog_url();

    env.cmd()
        .args(["--catalog-url", &catalog_url, "book", "show", "abc123", "--strict"])
        .assert()
        .failure()
        .stderr(contains("Catalog error"));
}

#[test]
fn session_works_before_init() {
    let env = TestEnv::new();
    env.cmd()
        .args(["session", "login", "--token", "tok"])
        .assert()
        .success();

    env.cmd()
        .args(["session", "status"])
        .assert()
        .success()
        .stdout(contains("Session: logged in"));

    env.cmd()
        .args(["session", "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out"));

    env.cmd()
        .args(["navigate", "/library"])
        .assert()
        .success()
        .stdout(contains("redirect: /library -> /login"));
}

#[test]
fn init_after_login_keeps_session() {
    let env = TestEnv::new();
    env.cmd()
        .args(["session", "login", "--token", "tok"])
        .assert()
        .success();

    env.cmd()
        .args(["init", "--with-catalog-url", "http://localhost:9999/books/v1"])
        .assert()
        .success()
        .stdout(contains("Initialized shelf directory"));

    env.cmd()
        .args(["navigate", "/library"])
        .assert()
        .success()
        .stdout(contains("proceed: library (LibraryView)"));

    env.cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already initialized"));
}

#[test]
fn invalid_log_level_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--log-level", "verbose", "routes"])
        .assert()
        .failure()
        .stderr(contains("invalid value 'verbose'"));

    env.cmd()
        .args(["--log-level", "debug", "routes"])
        .assert()
        .success()
        .stdout(contains("/library"));
}
