use std::{fs, path::PathBuf};

use tempfile::tempdir;

use constellation_cli::{Args, run};

/// Collects all .dot files from a directory
fn collect_dot_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("dot")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demo_files() -> Vec<String> {
    // Demos are at workspace root, relative to workspace not the crate
    let demos_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos");
    let demos = collect_dot_files(demos_path);

    assert!(!demos.is_empty(), "No demo diagrams found in demos/");
    demos
        .into_iter()
        .map(|path| path.to_string_lossy().to_string())
        .collect()
}

fn base_args(inputs: Vec<String>, output: PathBuf) -> Args {
    Args {
        inputs,
        output: Some(output.to_string_lossy().to_string()),
        mode: None,
        min_shared: None,
        hide_transitive: false,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demo_report() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("report.txt");

    let args = base_args(demo_files(), output_path.clone());
    run(&args).expect("demo run should succeed");

    let report = fs::read_to_string(&output_path).expect("report file written");

    // The three demo diagrams: payments ⊂ storefront, and logistics shares
    // "Billing" with both of the others.
    assert!(report.contains("diagrams (3 loaded, 3 visible):"));
    assert!(report.contains("storefront -> payments  subset"));
    assert!(report.contains("logistics"));
    assert!(report.contains("connections (3):"));
}

#[test]
fn e2e_smoke_test_mode_override() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("subset_only.txt");

    let mut args = base_args(demo_files(), output_path.clone());
    args.mode = Some("subset-only".to_string());
    run(&args).expect("demo run should succeed");

    let report = fs::read_to_string(&output_path).expect("report file written");
    assert!(report.contains("connections (1):"));
    assert!(report.contains("storefront -> payments  subset"));
    assert!(!report.contains("shared label"));
}

#[test]
fn e2e_smoke_test_threshold_filters_shared() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("threshold.txt");

    let mut args = base_args(demo_files(), output_path.clone());
    args.min_shared = Some(1);
    run(&args).expect("demo run should succeed");

    let report = fs::read_to_string(&output_path).expect("report file written");
    // Both shared edges carry exactly one label and drop; the subset stays.
    assert!(report.contains("connections (1):"));
    assert!(report.contains("storefront -> payments  subset"));
}

#[test]
fn e2e_smoke_test_invalid_mode_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("never_written.txt");

    let mut args = base_args(demo_files(), output_path.clone());
    args.mode = Some("everything".to_string());

    assert!(run(&args).is_err());
    assert!(!output_path.exists());
}

#[test]
fn e2e_smoke_test_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("missing.txt");

    let args = base_args(
        vec!["definitely/not/a/real/file.dot".to_string()],
        output_path,
    );

    assert!(run(&args).is_err());
}

#[test]
fn e2e_smoke_test_malformed_dot_is_tolerated() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let bad_path = temp_dir.path().join("broken.dot");
    fs::write(&bad_path, "this is not dot {{{").expect("write bad input");

    let output_path = temp_dir.path().join("tolerant.txt");
    let mut inputs = demo_files();
    inputs.push(bad_path.to_string_lossy().to_string());

    let args = base_args(inputs, output_path.clone());
    run(&args).expect("malformed input must not fail the run");

    let report = fs::read_to_string(&output_path).expect("report file written");
    // The broken diagram is loaded with zero labels and no connections.
    assert!(report.contains("diagrams (4 loaded, 4 visible):"));
    assert!(report.contains("broken  0 labels"));
    assert!(report.contains("connections (3):"));
}
