//! Integration tests for debgraph using the library interface

use std::fs;
use std::path::{Path, PathBuf};

use debgraph::config::{VisualizerConfig, load_config, validate_config};
use debgraph::error::DebGraphError;
use debgraph::executors::visualize::visualize;
use debgraph::output::ResultWriter;
use debgraph::query::{AptCacheSource, DependencySource};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Maps packages to fixed dependency lists
struct StaticSource(Vec<(&'static str, Vec<&'static str>)>);

impl DependencySource for StaticSource {
    fn dependencies_of(&self, package: &str) -> Result<Vec<String>, DebGraphError> {
        Ok(self
            .0
            .iter()
            .find(|(name, _)| *name == package)
            .map(|(_, deps)| deps.iter().map(|d| d.to_string()).collect())
            .unwrap_or_default())
    }
}

/// Write a visualizer stand-in and a configuration file, returning the config
/// path
fn write_config(root: &Path, extra: &str) -> PathBuf {
    let visualizer = root.join("plantuml.jar");
    fs::write(&visualizer, "").unwrap();

    let config_path = root.join("debgraph.toml");
    fs::write(
        &config_path,
        format!(
            r#"visualizer_path = "{}"
package_name = "curl"
result_path = "{}"
max_depth = 2
repository_url = "http://archive.ubuntu.com/ubuntu"
{extra}
"#,
            visualizer.display(),
            root.join("curl.puml").display()
        ),
    )
    .unwrap();
    config_path
}

fn load_valid_config(root: &Path) -> VisualizerConfig {
    validate_config(&load_config(&write_config(root, "")).unwrap()).unwrap()
}

fn curl_source() -> StaticSource {
    StaticSource(vec![
        ("curl", vec!["libcurl4", "openssl"]),
        ("libcurl4", vec!["openssl"]),
    ])
}

#[test]
fn test_visualize_writes_new_result_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_valid_config(temp_dir.path());

    let summary = visualize(&config, curl_source(), None).unwrap();

    assert_eq!(summary.edges, 3);
    assert_eq!(summary.queries, 4);
    assert_eq!(
        fs::read_to_string(&config.result_path).unwrap(),
        "@startuml\ndigraph dependencies {\n \"curl\" -> \"libcurl4\"\n \"curl\" -> \
         \"openssl\"\n \"libcurl4\" -> \"openssl\"\n}\n@enduml\n"
    );
    assert_eq!(summary.appended.len(), 7);
}

#[test]
fn test_second_run_appends_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_valid_config(temp_dir.path());

    visualize(&config, curl_source(), None).unwrap();
    let before = fs::read_to_string(&config.result_path).unwrap();

    let summary = visualize(&config, curl_source(), None).unwrap();

    assert!(summary.appended.is_empty());
    assert_eq!(fs::read_to_string(&config.result_path).unwrap(), before);
}

#[test]
fn test_new_edges_are_appended_after_existing_document() {
    let temp_dir = TempDir::new().unwrap();
    let config = load_valid_config(temp_dir.path());

    visualize(&config, curl_source(), None).unwrap();

    let grown = StaticSource(vec![
        ("curl", vec!["libcurl4", "openssl", "zlib1g"]),
        ("libcurl4", vec!["openssl"]),
    ]);
    let summary = visualize(&config, grown, None).unwrap();

    assert_eq!(summary.appended, vec![r#" "curl" -> "zlib1g""#]);
    let content = fs::read_to_string(&config.result_path).unwrap();
    assert!(content.ends_with("@enduml\n \"curl\" -> \"zlib1g\"\n"));
    assert_eq!(content.matches("@startuml").count(), 1);
}

#[test]
fn test_existing_lines_are_kept_once() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("result.puml");
    fs::write(&path, "X\n").unwrap();

    ResultWriter::new(&path).save("X\nY\n").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "X\nY\n");
    assert_eq!(content.lines().filter(|line| *line == "X").count(), 1);
}

#[test]
fn test_config_with_string_depth() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), "");
    let content = fs::read_to_string(&path)
        .unwrap()
        .replace("max_depth = 2", "max_depth = \"1\"");
    fs::write(&path, content).unwrap();

    let config = validate_config(&load_config(&path).unwrap()).unwrap();
    assert_eq!(config.max_depth, 1);
}

#[test]
fn test_invalid_toml_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "package_name = curl\n").unwrap();

    assert!(matches!(
        load_config(&path),
        Err(DebGraphError::TomlParseError(_))
    ));
}

#[test]
fn test_missing_query_program_aborts_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        r#"query_command = "debgraph-missing-apt-cache""#,
    );
    let config = validate_config(&load_config(&config_path).unwrap()).unwrap();
    let source = AptCacheSource::with_program(&config.query_command);

    match visualize(&config, &source, None) {
        Err(DebGraphError::EnvironmentUnavailable { program }) => {
            assert_eq!(program, "debgraph-missing-apt-cache")
        }
        other => panic!("Expected EnvironmentUnavailable, got {other:?}"),
    }
    assert!(!config.result_path.exists());
}

#[cfg(unix)]
#[test]
fn test_shell_script_as_query_command() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("fake-apt-cache");
    fs::write(
        &script,
        r#"#!/bin/sh
# usage: fake-apt-cache depends <package>
case "$2" in
  curl)
    echo "curl"
    echo "  Depends: libcurl4"
    echo "  Depends: openssl"
    echo "  Suggests: curl-doc"
    ;;
  libcurl4)
    echo "libcurl4"
    echo "  Depends: openssl"
    ;;
  *)
    echo "E: No packages found" >&2
    exit 100
    ;;
esac
"#,
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let config_path = write_config(
        temp_dir.path(),
        &format!("query_command = \"{}\"", script.display()),
    );
    let config = validate_config(&load_config(&config_path).unwrap()).unwrap();
    let source = AptCacheSource::with_program(&config.query_command);

    let summary = visualize(&config, &source, None).unwrap();

    assert_eq!(summary.edges, 3);
    let content = fs::read_to_string(&config.result_path).unwrap();
    assert!(content.contains(r#" "curl" -> "libcurl4""#));
    assert!(content.contains(r#" "libcurl4" -> "openssl""#));
    assert!(!content.contains("curl-doc"));
}
