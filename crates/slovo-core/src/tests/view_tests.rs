use slovo_types::{TRANSLATION_ERROR, WordPatch};

use super::memory_store;
use crate::DictionaryView;

#[tokio::test]
async fn test_list_is_alphabetical_ignoring_case() {
    let store = memory_store().await;
    store.add_many(&["banana", "Apple", "cherry"]).await;

    let view = DictionaryView::new(store);
    let words: Vec<_> = view.list(None).await.into_iter().map(|r| r.word).collect();

    assert_eq!(words, vec!["Apple", "banana", "cherry"]);
}

#[tokio::test]
async fn test_search_matches_word_or_translation() {
    let store = memory_store().await;
    let cat = store.add_one("cat").await.unwrap().id;
    store.add_one("catalog").await.unwrap();
    store.add_one("dog").await.unwrap();
    store.update(cat, WordPatch::translation("Кіт")).await.unwrap();

    let view = DictionaryView::new(store);

    let by_word: Vec<_> = view.list(Some(" CAT ")).await.into_iter().map(|r| r.word).collect();
    assert_eq!(by_word, vec!["cat", "catalog"]);

    let by_translation = view.list(Some("кіт")).await;
    assert_eq!(by_translation.len(), 1);
    assert_eq!(by_translation[0].id, cat);

    assert_eq!(view.list(Some("")).await.len(), 3);
}

#[tokio::test]
async fn test_entries_flag_pending_words() {
    let store = memory_store().await;
    let cat = store.add_one("cat").await.unwrap().id;
    store.add_one("dog").await.unwrap();
    store.update(cat, WordPatch::translation("кіт")).await.unwrap();

    let view = DictionaryView::new(store);
    let entries = view.entries(None).await;

    assert!(!entries[0].pending);
    assert!(entries[1].pending);
    assert_eq!(view.stats().await.with_translation, 1);
}

#[tokio::test]
async fn test_search_skips_error_markers() {
    let store = memory_store().await;
    let cat = store.add_one("cat").await.unwrap().id;
    let dog = store.add_one("dog").await.unwrap().id;
    store.update(cat, WordPatch::translation(TRANSLATION_ERROR)).await.unwrap();
    store.update(dog, WordPatch::translation("собака")).await.unwrap();

    let view = DictionaryView::new(store);

    assert!(view.list(Some("error")).await.is_empty());
    assert_eq!(view.list(Some("соба")).await.len(), 1);
}
