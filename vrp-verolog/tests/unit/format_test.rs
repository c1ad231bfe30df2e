use super::*;
use crate::helpers::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_file(dir: &TempDir, name: &str, content: String) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();

    path
}

parameterized_test! {can_resolve_format, (declared, path, expected), {
    let mut diagnostics = Diagnostics::new(FailurePolicy::FailFast);

    let format = FormatKind::resolve(declared, path.map(Path::new), "instance", &mut diagnostics);

    assert_eq!(format, FormatKind::Text);
    assert!(diagnostics.is_valid());
    assert_eq!(diagnostics.warning_messages(), expected);
}}

can_resolve_format! {
    case01_declared_text: (Some("txt"), Some("instance.dat"), Vec::<&str>::new()),
    case02_declared_unknown: (Some("json"), None::<&str>, vec!["Unknown instance file type: 'json', assuming 'txt'."]),
    case03_text_extension: (None, Some("data/instance.txt"), Vec::<&str>::new()),
    case04_unknown_extension: (None, Some("instance.dat"), vec!["Unknown instance file type, assuming 'txt'."]),
    case05_no_extension: (None, Some("instance"), vec!["Unknown instance file type, assuming 'txt'."]),
    case06_no_path: (None, None::<&str>, Vec::<&str>::new()),
}

#[test]
fn can_read_instance_and_solution_files() {
    let dir = TempDir::new().unwrap();
    let instance_path = create_file(&dir, "instance.txt", create_single_request_instance());
    let solution_path = create_file(
        &dir,
        "solution.txt",
        SolutionBuilder::default().add_day(1, vec![vec![1, 1]], vec![]).add_day(2, vec![], vec![vec![1, 1]]).build(),
    );

    let instance = read_instance_file(&instance_path, None, FailurePolicy::FailFast);
    assert!(instance.is_valid(), "{:?}", instance.diagnostics.error_messages());
    assert_eq!(instance.value.requests.len(), 1);

    let solution = read_solution_file(&solution_path, None, &instance.value, FailurePolicy::FailFast);
    assert!(solution.is_valid(), "{:?}", solution.diagnostics.error_messages());
    assert_eq!(solution.value.days.len(), 2);
}

#[test]
fn can_warn_about_unknown_extension_and_still_read_file() {
    let dir = TempDir::new().unwrap();
    let instance = parse_instance(create_single_request_instance());
    let solution_path = create_file(&dir, "solution.sol", SolutionBuilder::default().build());

    let solution = read_solution_file(&solution_path, None, &instance, FailurePolicy::FailFast);

    assert!(solution.is_valid());
    assert_eq!(solution.diagnostics.warning_messages(), vec!["Unknown solution file type, assuming 'txt'."]);
    assert_eq!(solution.value.name, "test");
}

#[test]
fn can_report_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    let instance = read_instance_file(&path, None, FailurePolicy::Tolerant);

    assert!(!instance.is_valid());
    let expected = format!("Instance file {} could not be read.", path.display());
    assert_eq!(instance.diagnostics.error_messages(), vec![expected]);
    assert_eq!(instance.value, Instance::default());
}
