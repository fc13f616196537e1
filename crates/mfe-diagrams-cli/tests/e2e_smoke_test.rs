use std::{fs, path::Path, process::Command};

use tempfile::tempdir;

use mfe_diagrams_cli::{Args, run};

/// The backend is an external prerequisite; skip rendering tests when the
/// `dot` executable is not installed.
fn graphviz_available() -> bool {
    Command::new("dot").arg("-V").output().is_ok()
}

fn args_for(out_dir: &Path) -> Args {
    Args {
        out_dir: Some(out_dir.to_path_buf()),
        format: None,
        config: None,
        log_level: "off".to_string(),
    }
}

/// Sorted file names present in a directory.
fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read output directory")
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn e2e_generates_four_named_diagrams() {
    if !graphviz_available() {
        eprintln!("skipping: Graphviz `dot` not installed");
        return;
    }

    let temp_dir = tempdir().expect("Failed to create temp directory");
    // Nested path that does not exist yet; generation must create it.
    let out_dir = temp_dir.path().join("docs").join("diagrams");

    let written = run(&args_for(&out_dir)).expect("Diagram generation failed");

    let names: Vec<String> = written
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "mfe-architecture.png",
            "deployment-architecture.png",
            "component-architecture.png",
            "data-flow.png",
        ]
    );

    for path in &written {
        let metadata = fs::metadata(path).expect("Output file missing");
        assert!(metadata.len() > 0, "Empty output file: {}", path.display());
    }
}

#[test]
fn e2e_rerun_produces_same_file_set() {
    if !graphviz_available() {
        eprintln!("skipping: Graphviz `dot` not installed");
        return;
    }

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().to_path_buf();

    let first = run(&args_for(&out_dir)).expect("First run failed");
    let listing_after_first = dir_listing(&out_dir);

    let second = run(&args_for(&out_dir)).expect("Second run failed");
    let listing_after_second = dir_listing(&out_dir);

    assert_eq!(first, second, "Reruns must write the same paths");
    assert_eq!(listing_after_first, listing_after_second);
    assert_eq!(listing_after_second.len(), 4);
}

#[test]
fn e2e_svg_format_changes_extension() {
    if !graphviz_available() {
        eprintln!("skipping: Graphviz `dot` not installed");
        return;
    }

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut args = args_for(temp_dir.path());
    args.format = Some("svg".parse().unwrap());

    let written = run(&args).expect("Diagram generation failed");

    for path in &written {
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("svg"));
        let contents = fs::read_to_string(path).expect("Output file missing");
        assert!(contents.contains("<svg"), "Not SVG: {}", path.display());
    }
}

#[cfg(unix)]
#[test]
fn e2e_unwritable_output_location_fails() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let locked = temp_dir.path().join("locked");
    fs::create_dir(&locked).expect("Failed to create locked directory");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555))
        .expect("Failed to set permissions");

    // Mode bits are not enforced for privileged users; probe first.
    let probe = locked.join("probe");
    if fs::create_dir(&probe).is_ok() {
        eprintln!("skipping: permissions not enforced in this environment");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("Failed to restore permissions");
        return;
    }

    let out_dir = locked.join("diagrams");
    let result = run(&args_for(&out_dir));

    assert!(result.is_err(), "Unwritable location must fail the run");
    assert!(!out_dir.exists(), "No partial output expected on failure");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");
}
