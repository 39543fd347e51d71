use collection_factory::collection::{Collection, Document};
use collection_factory::common::Value;
use collection_factory::doc;
use collection_factory::errors::ErrorKind;
use collection_factory::factory::CreationParams;
use collection_factory::filter::{all, field};
use collection_factory_int_test::test_util::{create_test_docs, create_test_factory};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_has_and_get_before_creation() {
    let factory = create_test_factory();

    assert!(!factory.has_collection("books").unwrap());
    assert!(factory.get_collection("books").unwrap().is_none());
}

#[test]
fn test_create_registers_collection_under_its_name() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();

    assert_eq!(collection.name(), "books");
    assert!(factory.has_collection("books").unwrap());

    let found = factory.get_collection("books").unwrap().unwrap();
    assert_eq!(found.name(), "books");
}

#[test]
fn test_create_twice_returns_a_handle_to_the_same_collection() {
    let factory = create_test_factory();

    let first = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();
    first.insert(doc! { "title": "Dune" }).unwrap();

    let second = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();
    assert_eq!(second.size().unwrap(), 1);

    second.insert(doc! { "title": "Foundation" }).unwrap();
    assert_eq!(first.size().unwrap(), 2);
}

#[test]
fn test_create_twice_keeps_the_original_hooks() {
    let factory = create_test_factory();

    let first_hook_calls = Arc::new(AtomicUsize::new(0));
    let second_hook_calls = Arc::new(AtomicUsize::new(0));

    let first_counter = first_hook_calls.clone();
    factory
        .create_collection(CreationParams::new("books").on_insert(
            move |_collection: &Collection, _document: &mut Document| {
                first_counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        ))
        .unwrap();

    // The name is already registered: this hook set is never wired.
    let second_counter = second_hook_calls.clone();
    let collection = factory
        .create_collection(CreationParams::new("books").on_insert(
            move |_collection: &Collection, _document: &mut Document| {
                second_counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        ))
        .unwrap();

    collection.insert(doc! { "title": "Dune" }).unwrap();
    assert_eq!(first_hook_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_hook_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_create_with_empty_name_fails() {
    let factory = create_test_factory();
    let result = factory.create_collection(CreationParams::new(""));

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().kind(), &ErrorKind::ValidationError);
}

#[test]
fn test_insert_and_find_round_trip() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();

    for document in create_test_docs() {
        collection.insert(document).unwrap();
    }
    assert_eq!(collection.size().unwrap(), 3);

    let cursor = collection.find(&field("author").eq("Frank Herbert")).unwrap();
    let documents: Vec<Document> = cursor.collect();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].get("title"), Some(&Value::from("Dune")));

    let everything = collection.find(&all()).unwrap();
    assert_eq!(everything.size(), 3);
}

#[test]
fn test_documents_support_nested_values() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();

    let id = collection
        .insert(doc! {
            "title": "Dune",
            "tags": json!(["classic", "scifi"]),
            "publisher": json!({ "name": "Chilton", "country": "US" })
        })
        .unwrap();

    let stored = collection.get_by_id(&id).unwrap().unwrap();
    assert_eq!(stored.get("tags"), Some(&json!(["classic", "scifi"])));
    assert_eq!(
        stored.get("publisher"),
        Some(&json!({ "name": "Chilton", "country": "US" }))
    );
}
