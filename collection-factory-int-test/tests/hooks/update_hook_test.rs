use chrono::Utc;
use collection_factory::collection::{Collection, Document, UpdateOptions};
use collection_factory::common::Value;
use collection_factory::doc;
use collection_factory::errors::{ErrorKind, FactoryError, FactoryResult};
use collection_factory::factory::CreationParams;
use collection_factory::filter::{all, field, Filter};
use collection_factory_int_test::test_util::create_test_factory;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_before_update_hook_exception_leaves_document_unmodified() {
    let factory = create_test_factory();

    let collection = factory
        .create_collection(CreationParams::new("posts").on_update(
            |_collection: &Collection,
             _filter: &mut Filter,
             _modifier: &mut Document,
             _options: &mut UpdateOptions| {
                Err(FactoryError::new(
                    "updates are frozen",
                    ErrorKind::InvalidOperation,
                ))
            },
        ))
        .unwrap();

    let id = collection.insert(doc! { "title": "original" }).unwrap();

    let result = collection.update(
        all(),
        doc! { "title": "changed" },
        UpdateOptions::default(),
    );
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::InvalidOperation);
    assert_eq!(error.message(), "updates are frozen");

    // The delegate update never ran.
    let stored = collection.get_by_id(&id).unwrap().unwrap();
    assert_eq!(stored.get("title"), Some(&Value::from("original")));
}

#[test]
fn test_before_update_hook_stamps_the_modifier() {
    let factory = create_test_factory();

    let collection = factory
        .create_collection(CreationParams::new("posts").on_update(
            |_collection: &Collection,
             _filter: &mut Filter,
             modifier: &mut Document,
             _options: &mut UpdateOptions| {
                modifier.put("updated_at", Utc::now().timestamp())
            },
        ))
        .unwrap();

    let id = collection.insert(doc! { "title": "t" }).unwrap();
    collection
        .update(
            field("title").eq("t"),
            doc! { "title": "t2" },
            UpdateOptions::default(),
        )
        .unwrap();

    let stored = collection.get_by_id(&id).unwrap().unwrap();
    assert_eq!(stored.get("title"), Some(&Value::from("t2")));
    assert!(stored.get("updated_at").and_then(Value::as_i64).is_some());
}

#[test]
fn test_after_update_hook_observes_the_written_count() {
    let factory = create_test_factory();

    let written = Arc::new(AtomicUsize::new(0));
    let written_in_hook = written.clone();

    let collection = factory
        .create_collection(CreationParams::new("posts").after_update(
            move |_collection: &Collection,
                  _filter: &Filter,
                  _modifier: &Document,
                  _options: &UpdateOptions,
                  outcome: &FactoryResult<u64>| {
                if let Ok(count) = outcome {
                    written_in_hook.fetch_add(*count as usize, Ordering::SeqCst);
                }
                Ok(())
            },
        ))
        .unwrap();

    collection.insert(doc! { "shelf": "a" }).unwrap();
    collection.insert(doc! { "shelf": "a" }).unwrap();
    collection.insert(doc! { "shelf": "b" }).unwrap();

    let count = collection
        .update(
            field("shelf").eq("a"),
            doc! { "checked": true },
            UpdateOptions::default(),
        )
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(written.load(Ordering::SeqCst), 2);
}
