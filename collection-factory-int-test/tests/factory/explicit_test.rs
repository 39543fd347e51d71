use collection_factory::collection::{Collection, DocId, Document};
use collection_factory::doc;
use collection_factory::errors::FactoryResult;
use collection_factory::factory::CreationParams;
use collection_factory::filter::Filter;
use collection_factory_int_test::test_util::create_test_factory;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_explicit_collection_exists_immediately() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books").explicit(true))
        .unwrap();

    assert!(collection.is_materialized());
    // The probe document does not survive creation.
    assert_eq!(collection.size().unwrap(), 0);
}

#[test]
fn test_probe_is_invisible_to_configured_hooks() {
    let factory = create_test_factory();

    let insert_calls = Arc::new(AtomicUsize::new(0));
    let remove_calls = Arc::new(AtomicUsize::new(0));
    let after_insert_calls = Arc::new(AtomicUsize::new(0));
    let after_remove_calls = Arc::new(AtomicUsize::new(0));

    let insert_counter = insert_calls.clone();
    let remove_counter = remove_calls.clone();
    let after_insert_counter = after_insert_calls.clone();
    let after_remove_counter = after_remove_calls.clone();

    let collection = factory
        .create_collection(
            CreationParams::new("books")
                .explicit(true)
                .on_insert(move |_collection: &Collection, _document: &mut Document| {
                    insert_counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
                .on_remove(move |_collection: &Collection, _filter: &mut Filter| {
                    remove_counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
                .after_insert(
                    move |_collection: &Collection,
                          _document: &Document,
                          _outcome: &FactoryResult<DocId>| {
                        after_insert_counter.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    },
                )
                .after_remove(
                    move |_collection: &Collection,
                          _filter: &Filter,
                          _outcome: &FactoryResult<u64>| {
                        after_remove_counter.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    },
                ),
        )
        .unwrap();

    assert!(collection.is_materialized());
    assert_eq!(insert_calls.load(Ordering::SeqCst), 0);
    assert_eq!(remove_calls.load(Ordering::SeqCst), 0);
    assert_eq!(after_insert_calls.load(Ordering::SeqCst), 0);
    assert_eq!(after_remove_calls.load(Ordering::SeqCst), 0);

    // The hooks were restored after the probe: production calls fire them.
    let id = collection.insert(doc! { "title": "Dune" }).unwrap();
    collection.remove(collection_factory::filter::by_id(id)).unwrap();

    assert_eq!(insert_calls.load(Ordering::SeqCst), 1);
    assert_eq!(remove_calls.load(Ordering::SeqCst), 1);
    assert_eq!(after_insert_calls.load(Ordering::SeqCst), 1);
    assert_eq!(after_remove_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_explicit_creation_is_not_repeated_for_registered_names() {
    let factory = create_test_factory();

    let insert_calls = Arc::new(AtomicUsize::new(0));
    let insert_counter = insert_calls.clone();

    factory
        .create_collection(CreationParams::new("books").on_insert(
            move |_collection: &Collection, _document: &mut Document| {
                insert_counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        ))
        .unwrap();

    // Re-creating an already registered name skips the probe entirely.
    let collection = factory
        .create_collection(CreationParams::new("books").explicit(true))
        .unwrap();
    assert!(!collection.is_materialized());
    assert_eq!(insert_calls.load(Ordering::SeqCst), 0);
}
