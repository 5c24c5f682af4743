use std::fs;

use pal_core::errors::PalError;
use pal_scan::{
    run_batch, scan_text, BatchConfig, BatchInput, ScanConfig, SymbolUnit,
};

fn text(text: &str) -> BatchInput {
    BatchInput::Text {
        text: text.into(),
        label: None,
    }
}

#[test]
fn batch_scans_inline_and_file_inputs_in_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("level.txt"), "xxlevelyy").unwrap();
    let config = BatchConfig {
        scan: ScanConfig::default(),
        inputs: vec![
            text("cbbd"),
            BatchInput::File {
                file: "level.txt".into(),
                label: None,
            },
            text("abcba"),
        ],
    };

    let report = run_batch(&config, dir.path()).unwrap();
    let found: Vec<&str> = report.entries.iter().map(|e| e.palindrome.as_str()).collect();
    assert_eq!(found, vec!["bb", "level", "abcba"]);
    // "level" and "abcba" tie at 5; the earlier entry wins
    assert_eq!(report.longest, Some(1));
    assert_eq!(
        report.entries[1].provenance.label.as_deref(),
        Some("level.txt")
    );

    let again = run_batch(&config, dir.path()).unwrap();
    assert_eq!(again.batch_hash, report.batch_hash);
}

#[test]
fn batch_config_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.yaml");
    fs::write(&path, "inputs:\n  - text: noon\n    label: clock\n").unwrap();
    let config = BatchConfig::load(&path).unwrap();
    let report = run_batch(&config, dir.path()).unwrap();
    assert_eq!(report.entries[0].palindrome, "noon");
    assert_eq!(report.entries[0].provenance.label.as_deref(), Some("clock"));
}

#[test]
fn empty_batch_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.yaml");
    fs::write(&path, "scan:\n  emit_radii: true\n").unwrap();
    let err = BatchConfig::load(&path).unwrap_err();
    assert!(matches!(err, PalError::Config(_)));
    assert_eq!(err.info().code, "empty-batch");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = BatchConfig {
        scan: ScanConfig::default(),
        inputs: vec![BatchInput::File {
            file: "absent.txt".into(),
            label: None,
        }],
    };
    let err = run_batch(&config, dir.path()).unwrap_err();
    assert!(matches!(err, PalError::Io(_)));
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn length_limit_is_enforced_per_unit() {
    let config = ScanConfig {
        unit: SymbolUnit::Char,
        max_input_len: Some(3),
        ..ScanConfig::default()
    };
    assert!(scan_text("ééé", &config).is_ok());
    let err = scan_text("abcd", &config).unwrap_err();
    assert_eq!(err.info().code, "input-too-long");
    assert_eq!(err.info().context.get("limit").map(String::as_str), Some("3"));

    let bytes = ScanConfig {
        unit: SymbolUnit::Byte,
        ..config
    };
    assert!(scan_text("ééé", &bytes).is_err());

    let zero = ScanConfig {
        max_input_len: Some(0),
        ..ScanConfig::default()
    };
    assert_eq!(zero.validate().unwrap_err().info().code, "max-input-len-zero");
}

#[test]
fn byte_reports_count_bytes() {
    let config = ScanConfig {
        unit: SymbolUnit::Byte,
        ..ScanConfig::default()
    };
    let report = scan_text("aé", &config).unwrap();
    assert_eq!(report.input_len, 3);
    assert_eq!(report.transformed_len, 9);
    assert_eq!(report.span.len, 1);
    assert_eq!(report.palindrome, "a");
    assert!(report.expansion_steps <= report.transformed_len);
}
