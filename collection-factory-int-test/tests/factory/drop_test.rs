use collection_factory::doc;
use collection_factory::errors::ErrorKind;
use collection_factory::factory::CreationParams;
use collection_factory_int_test::test_util::create_test_factory;

#[test]
fn test_drop_never_created_collection_is_not_found() {
    let factory = create_test_factory();
    let result = factory.drop_collection("books");

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().kind(), &ErrorKind::CollectionNotFound);
}

#[test]
fn test_drop_unmaterialized_collection_returns_false_without_raising() {
    let factory = create_test_factory();
    factory
        .create_collection(CreationParams::new("books"))
        .unwrap();

    // Nothing was ever written, so the backing store has nothing to clear.
    assert!(!factory.drop_collection("books").unwrap());
    assert!(factory.has_collection("books").unwrap());
}

#[test]
fn test_drop_materialized_collection_unregisters_it() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();
    collection.insert(doc! { "title": "Dune" }).unwrap();

    assert!(factory.drop_collection("books").unwrap());
    assert!(!factory.has_collection("books").unwrap());
    assert!(factory.get_collection("books").unwrap().is_none());
}

#[test]
fn test_recreate_after_drop_starts_empty() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();
    collection.insert(doc! { "title": "Dune" }).unwrap();

    assert!(factory.drop_collection("books").unwrap());

    let recreated = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();
    assert_eq!(recreated.size().unwrap(), 0);
    assert!(!recreated.is_materialized());
}
