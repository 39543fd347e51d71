use collection_factory::client::memory::MemoryClient;
use collection_factory::client::StorageClient;
use collection_factory::collection::Document;
use collection_factory::doc;
use collection_factory::factory::CollectionFactory;

/// Builds a factory over a fresh in-memory client.
///
/// Each test gets its own client and registry, so there is no shared state
/// to tear down between tests.
pub fn create_test_factory() -> CollectionFactory {
    CollectionFactory::new(StorageClient::new(MemoryClient::new()))
}

/// A small batch of documents shaped like the ones the tests query for.
pub fn create_test_docs() -> Vec<Document> {
    vec![
        doc! {
            "title": "Dune",
            "author": "Frank Herbert",
            "year": 1965
        },
        doc! {
            "title": "Foundation",
            "author": "Isaac Asimov",
            "year": 1951
        },
        doc! {
            "title": "Hyperion",
            "author": "Dan Simmons",
            "year": 1989
        },
    ]
}
