use std::io::Write;
use std::mem::{align_of, size_of};
use std::process::Command;

use sized_record::SizedRecord;
use tempfile::NamedTempFile;

fn run() -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_sized_record"))
        .output()
        .expect("failed to run sized_record");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("stdout is not utf-8")
}

fn parse(stdout: &str) -> (usize, usize) {
    assert!(stdout.ends_with('\n'));
    let line = stdout.trim_end_matches('\n');
    assert!(!line.contains('\n'), "expected exactly one line, got {stdout:?}");
    let numbers: Vec<&str> = line.split(' ').collect();
    assert_eq!(numbers.len(), 2, "expected two numbers, got {line:?}");
    (numbers[0].parse().unwrap(), numbers[1].parse().unwrap())
}

#[test]
fn prints_two_footprints_on_one_line() {
    let (first, second) = parse(&run());
    assert_eq!(first, size_of::<SizedRecord<u16, u32>>());
    assert_eq!(second, size_of::<SizedRecord<u32, u16>>());
}

#[test]
fn footprints_respect_alignment() {
    let (first, second) = parse(&run());
    let align = align_of::<u16>().max(align_of::<u32>());
    let payload = 2 * size_of::<u16>() + size_of::<u32>();
    for footprint in [first, second] {
        assert!(footprint >= payload);
        assert_eq!(footprint % align, 0);
    }
}

#[test]
fn output_is_stable_across_runs() {
    let runs: Vec<String> = (0..3).map(|_| run()).collect();
    assert!(runs.windows(2).all(|pair| pair[0] == pair[1]));
}

// ============================================================================
// layout_report
// ============================================================================

fn report_with(args: &[&std::ffi::OsStr]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_layout_report"))
        .args(args)
        .output()
        .expect("failed to run layout_report")
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn report_json_format_is_valid_json() {
    let config = config_file("format = \"json\"\n");
    let output = report_with(&[config.path().as_os_str()]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &value["declaration_order"][0];
    assert_eq!(first["name"], "SizedRecord<u16, u32>");
    assert_eq!(first["size"], size_of::<SizedRecord<u16, u32>>());
    assert_eq!(value["compiler_order"].as_array().unwrap().len(), 2);
}

#[test]
fn report_without_color_has_no_escape_codes() {
    let config = config_file("format = \"plain\"\ncolor = false\n");
    let output = report_with(&[config.path().as_os_str()]);
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("SizedRecord<u32, u16>"));
    assert!(text.contains("CompactRecord<u16, u32>"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn report_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let output = report_with(&[missing.as_os_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ConfigRead"));
}

#[test]
fn report_invalid_config_fails() {
    let config = config_file("format = \"yaml\"\n");
    let output = report_with(&[config.path().as_os_str()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ConfigParse"));
}
