use collection_factory::client::Helpers;
use collection_factory::collection::{Document, ProjectionFields};
use collection_factory::common::Value;
use collection_factory::doc;
use collection_factory::factory::CreationParams;
use collection_factory::filter::all;
use collection_factory::schema::{FieldType, Schema};
use collection_factory_int_test::test_util::create_test_factory;

fn book_schema() -> Schema {
    Schema::builder()
        .required_field("title", FieldType::Text)
        .field("year", FieldType::Integer)
        .build()
        .unwrap()
}

#[test]
fn test_schema_is_attached_and_introspectable() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books").schema(book_schema()))
        .unwrap();

    let attached = collection.schema().unwrap();
    assert_eq!(attached, book_schema());
    assert!(attached.field("title").unwrap().is_required());
}

#[test]
fn test_public_fields_are_retained_as_metadata() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(
            CreationParams::new("books")
                .public_fields(ProjectionFields::new().include("title").include("year")),
        )
        .unwrap();

    let fields = collection.public_fields().unwrap();
    assert!(fields.is_included("title"));
    assert!(fields.is_included("year"));
    assert!(!fields.is_included("internal_note"));
}

#[test]
fn test_helpers_are_computed_on_read() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books").helpers(Helpers::new().helper(
            "display_title",
            |document: &Document| {
                let title = document
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or("untitled");
                let year = document.get("year").and_then(Value::as_i64).unwrap_or(0);
                Ok(Value::from(format!("{} ({})", title, year)))
            },
        )))
        .unwrap();

    let id = collection
        .insert(doc! { "title": "Dune", "year": 1965 })
        .unwrap();

    let fetched = collection.get_by_id(&id).unwrap().unwrap();
    assert_eq!(
        fetched.get("display_title"),
        Some(&Value::from("Dune (1965)"))
    );

    let found = collection.find(&all()).unwrap().first().unwrap();
    assert_eq!(
        found.get("display_title"),
        Some(&Value::from("Dune (1965)"))
    );
}

#[test]
fn test_reconfiguration_is_idempotent() {
    let factory = create_test_factory();

    let params = || {
        CreationParams::new("books")
            .schema(book_schema())
            .public_fields(ProjectionFields::new().include("title"))
            .helpers(
                Helpers::new()
                    .helper("label", |_document: &Document| Ok(Value::from("book"))),
            )
    };

    let first = factory.create_collection(params()).unwrap();
    first.insert(doc! { "title": "Dune" }).unwrap();

    // Re-creating with the same configuration re-applies it without error
    // and without disturbing the stored documents.
    let second = factory.create_collection(params()).unwrap();
    assert_eq!(second.size().unwrap(), 1);
    assert_eq!(second.schema().unwrap(), book_schema());
    assert!(second.public_fields().unwrap().is_included("title"));

    let found = second.find(&all()).unwrap().first().unwrap();
    assert_eq!(found.get("label"), Some(&Value::from("book")));
}

#[test]
fn test_later_configuration_replaces_earlier() {
    let factory = create_test_factory();

    factory
        .create_collection(
            CreationParams::new("books")
                .public_fields(ProjectionFields::new().include("title")),
        )
        .unwrap();

    let collection = factory
        .create_collection(
            CreationParams::new("books")
                .public_fields(ProjectionFields::new().include("year")),
        )
        .unwrap();

    let fields = collection.public_fields().unwrap();
    assert!(fields.is_included("year"));
    assert!(!fields.is_included("title"));
}
