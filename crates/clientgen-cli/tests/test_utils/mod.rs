//! Test utilities for clientgen integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// External imports (alphabetized)
use anyhow::Context;
use tempfile::TempDir;

/// Creates a temporary directory for test outputs
pub fn create_temp_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let temp_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, temp_path))
}

/// Path of a file under the workspace's `tests/fixtures` directory
pub fn fixture_path(relative_path: &str) -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map(|root| root.join("tests/fixtures").join(relative_path))
        .unwrap_or_else(|| PathBuf::from(relative_path))
}

/// Command for the built `clientgen` binary
pub fn clientgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clientgen"))
}

/// Writes a small OpenAPI document in YAML form
pub fn create_test_openapi_spec(dir: &Path) -> anyhow::Result<PathBuf> {
    let spec_path = dir.join("openapi.yaml");
    let spec_content = r#"
openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths:
  /orders:
    post:
      operationId: placeOrder
      requestBody:
        content:
          application/json:
            schema:
              $ref: '#/components/schemas/Order'
      responses:
        '200':
          description: Placed
          content:
            application/json:
              schema:
                $ref: '#/components/schemas/Order'
components:
  schemas:
    Order:
      type: object
      required: [id]
      properties:
        id:
          type: integer
        note:
          type: string
"#;
    fs::write(&spec_path, spec_content)
        .with_context(|| format!("Failed to write {}", spec_path.display()))?;
    Ok(spec_path)
}

/// Asserts that a file contains specific content
pub fn assert_file_contains<P: AsRef<Path>>(path: P, contents: &[&str]) -> anyhow::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(anyhow::anyhow!("File not found: {}", path.display()));
    }

    let file_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let missing_contents: Vec<_> = contents
        .iter()
        .filter(|expected| !file_content.contains(**expected))
        .copied()
        .collect();

    if !missing_contents.is_empty() {
        return Err(anyhow::anyhow!(
            "File {} is missing expected content:\n  {}",
            path.display(),
            missing_contents.join("\n  ")
        ));
    }

    Ok(())
}
