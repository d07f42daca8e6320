//! Test helpers: build the router over a temporary uploads directory.
//!
//! Run from workspace root: `cargo test -p gallery-api`.

pub mod fixtures;

use axum_test::TestServer;
use gallery_core::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_BASE_URL: &str = "http://localhost:5174";

/// Test application: server and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub uploads_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Names of the files currently in the uploads directory
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.uploads_dir)
            .expect("read uploads dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn create_test_config(uploads_dir: &Path) -> Config {
    Config {
        uploads_dir: uploads_dir.to_path_buf(),
        public_base_url: TEST_BASE_URL.to_string(),
        ..Config::default()
    }
}

/// Setup test app with isolated local storage.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup test app, letting the caller adjust the configuration first.
pub async fn setup_test_app_with<F>(customize: F) -> TestApp
where
    F: FnOnce(&mut Config),
{
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let uploads_dir = temp_dir.path().join("uploads");

    let mut config = create_test_config(&uploads_dir);
    customize(&mut config);

    let (_state, router) = gallery_api::setup::initialize_app(config)
        .await
        .expect("Failed to initialize app");

    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        uploads_dir,
        _temp_dir: temp_dir,
    }
}
