#![allow(dead_code)]

pub mod mock_data;
pub mod server;

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub use mock_data::{MockCatalog, fixture_products, ids};
pub use server::spawn_catalog_server;

/// Helper struct to run the catalog binary with an isolated config
pub struct CatalogTest {
    pub temp_dir: TempDir,
    binary_path: PathBuf,
}

impl CatalogTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        CatalogTest {
            temp_dir,
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_catalog")),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config file");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("CATALOG_CONFIG", self.config_path())
            .env_remove("CATALOG_API_URL")
            .env_remove("CATALOG_LOG")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute catalog command")
    }

    /// Run with `input` fed to stdin (for the interactive browser)
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("CATALOG_CONFIG", self.config_path())
            .env_remove("CATALOG_API_URL")
            .env_remove("CATALOG_LOG")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn catalog command");

        child
            .stdin
            .take()
            .expect("stdin should be piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        child
            .wait_with_output()
            .expect("Failed to wait for catalog command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
