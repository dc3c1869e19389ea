use katas::app::{run_data, run_order};
use katas::config::StorageKind;
use katas::{DataFormatKind, DataProcessor, KataConfig, LocalStorage, OrderOutcome, ProcessingStatus};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_order_flow_from_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[order]\nitems_in_stock = false\n")
        .unwrap();

    let config = KataConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(run_order(&config), OrderOutcome::ItemsOutOfStock);
}

#[test]
fn test_data_flow_writes_local_journal() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let config_content = format!(
        r#"
[storage]
kind = "local"
output_path = "{}"
file_name = "journal.log"
"#,
        output_path
    );
    let config = KataConfig::from_toml_str(&config_content).unwrap();
    assert_eq!(config.storage.kind, StorageKind::Local);

    assert_eq!(
        run_data(&config, DataFormatKind::Csv, Some("name,age,location")),
        ProcessingStatus::Success
    );
    assert_eq!(
        run_data(&config, DataFormatKind::Json, Some(r#"{"name":"John"}"#)),
        ProcessingStatus::Success
    );
    // Rejected payloads never reach the journal
    assert_eq!(
        run_data(&config, DataFormatKind::Csv, Some("invalid,row")),
        ProcessingStatus::TransformationFailed
    );
    assert_eq!(
        run_data(&config, DataFormatKind::Csv, None),
        ProcessingStatus::ValidationFailed
    );

    let journal = std::fs::read_to_string(temp_dir.path().join("journal.log")).unwrap();
    let payloads: Vec<&str> = journal
        .lines()
        .filter_map(|line| line.split_once('\t').map(|(_, payload)| payload))
        .collect();
    assert_eq!(payloads, vec!["name;age;location", "{'name':'John'}"]);
}

#[test]
fn test_memory_storage_failure_from_config() {
    let config = KataConfig::from_toml_str("[storage]\nkind = \"memory\"\nfail = true\n").unwrap();

    assert_eq!(
        run_data(&config, DataFormatKind::Csv, Some("a,b")),
        ProcessingStatus::StorageFailed
    );
}

#[test]
fn test_borrowed_local_storage_is_inspectable_after_processing() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap(), "data.log");

    {
        let processor = DataProcessor::new(&storage);
        assert_eq!(
            processor.process_csv_data(Some("x,y")),
            ProcessingStatus::Success
        );
    }

    let journal = std::fs::read_to_string(storage.journal_path()).unwrap();
    assert!(journal.trim_end().ends_with("\tx;y"));
}
