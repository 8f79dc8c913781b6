use slovo_types::{TextSource, WordPatch};

use super::memory_store;
use crate::TransferError;
use crate::transfer::{export_json, export_to_path, import_from_path, import_json, parse_import};

#[tokio::test]
async fn test_export_empty_dictionary_fails() {
    let store = memory_store().await;
    assert!(matches!(
        export_json(&store).await,
        Err(TransferError::EmptyDictionary)
    ));
}

#[tokio::test]
async fn test_export_then_import_restores_words() {
    let source = memory_store().await;
    let id = source.add_one("cat").await.unwrap().id;
    source.add_one("dog").await.unwrap();
    source.update(id, WordPatch::translation("кіт")).await.unwrap();

    let json = export_json(&source).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["translation"], "кіт");
    assert!(value[0]["dateAdded"].is_string());

    let target = memory_store().await;
    let reports = import_json(&target, &json).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.is_created()));
    let cat = target.get_by_text("cat").await.unwrap();
    assert_eq!(cat.source, TextSource::Import);
    // Only words travel, translations are fetched again
    assert_eq!(cat.translation, "");
}

#[tokio::test]
async fn test_import_reports_existing_words() {
    let store = memory_store().await;
    store.add_one("Cat").await.unwrap();

    let reports = import_json(&store, r#"[{"word": "cat"}, {"word": " owl "}]"#)
        .await
        .unwrap();

    assert!(reports[0].is_exists());
    assert!(reports[1].is_created());
    assert_eq!(reports[1].word(), "owl");
}

#[test]
fn test_parse_import_validation() {
    assert!(matches!(
        parse_import("not json"),
        Err(TransferError::InvalidJson(_))
    ));
    assert!(matches!(
        parse_import(r#"{"word": "cat"}"#),
        Err(TransferError::NotAnArray)
    ));
    assert!(matches!(parse_import("[]"), Err(TransferError::EmptyArray)));
    assert!(matches!(
        parse_import(r#"[{"word": "cat"}, {"translation": "x"}]"#),
        Err(TransferError::InvalidEntry { index: 1, .. })
    ));
    assert!(matches!(
        parse_import(r#"["cat"]"#),
        Err(TransferError::InvalidEntry { index: 0, .. })
    ));

    let words = parse_import(r#"[{"word": " cat ", "extra": 1}]"#).unwrap();
    assert_eq!(words, vec!["cat"]);
}

#[tokio::test]
async fn test_invalid_import_adds_nothing() {
    let store = memory_store().await;
    let result = import_json(&store, r#"[{"word": "cat"}, {"word": ""}]"#).await;

    assert!(result.is_err());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("backup.json");

    let store = memory_store().await;
    store.add_many(&["one", "two", "three"]).await;
    assert_eq!(export_to_path(&store, &path).await.unwrap(), 3);

    let fresh = memory_store().await;
    let reports = import_from_path(&fresh, &path).await.unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(fresh.len().await, 3);

    let txt = dir.path().join("backup.txt");
    std::fs::write(&txt, "[]").unwrap();
    assert!(matches!(
        import_from_path(&fresh, &txt).await,
        Err(TransferError::NotJsonFile(_))
    ));
}
