use collection_factory::access::{AccessRuleSet, MutationRequest};
use collection_factory::client::Helpers;
use collection_factory::collection::{Document, ProjectionFields, UpdateOptions};
use collection_factory::common::{ExecutionContext, Value};
use collection_factory::doc;
use collection_factory::errors::ErrorKind;
use collection_factory::factory::CreationParams;
use collection_factory::filter::{all, field};
use collection_factory_int_test::test_util::create_test_factory;

#[test]
fn test_default_deny_blocks_all_untrusted_mutations() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();
    collection.insert(doc! { "title": "Dune" }).unwrap();

    let untrusted = collection.with_context(ExecutionContext::Untrusted);

    let insert = untrusted.insert(doc! { "title": "forged" });
    assert_eq!(insert.unwrap_err().kind(), &ErrorKind::AccessDenied);

    let update = untrusted.update(
        all(),
        doc! { "title": "defaced" },
        UpdateOptions::default(),
    );
    assert_eq!(update.unwrap_err().kind(), &ErrorKind::AccessDenied);

    let remove = untrusted.remove(all());
    assert_eq!(remove.unwrap_err().kind(), &ErrorKind::AccessDenied);

    // Nothing got through.
    assert_eq!(collection.size().unwrap(), 1);
    let stored = collection.find(&all()).unwrap().first().unwrap();
    assert_eq!(stored.get("title"), Some(&Value::from("Dune")));
}

#[test]
fn test_default_deny_is_unaffected_by_public_fields_and_helpers() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(
            CreationParams::new("books")
                .public_fields(ProjectionFields::new().include("title"))
                .helpers(
                    Helpers::new()
                        .helper("label", |_document: &Document| Ok(Value::from("book"))),
                ),
        )
        .unwrap();

    let untrusted = collection.with_context(ExecutionContext::Untrusted);
    let result = untrusted.insert(doc! { "title": "forged" });
    assert_eq!(result.unwrap_err().kind(), &ErrorKind::AccessDenied);
}

#[test]
fn test_allow_rule_grants_untrusted_writes() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("drafts"))
        .unwrap();

    // Grant inserts of documents that carry an author field.
    collection
        .allow(
            AccessRuleSet::new().insert(|request: &MutationRequest<'_>| match request {
                MutationRequest::Insert { document } => document.has_field("author"),
                _ => false,
            }),
        )
        .unwrap();

    let untrusted = collection.with_context(ExecutionContext::Untrusted);

    untrusted
        .insert(doc! { "title": "t", "author": "someone" })
        .unwrap();
    assert_eq!(collection.size().unwrap(), 1);

    let anonymous = untrusted.insert(doc! { "title": "t" });
    assert_eq!(anonymous.unwrap_err().kind(), &ErrorKind::AccessDenied);

    // The grant covers inserts only.
    let update = untrusted.update(
        field("author").eq("someone"),
        doc! { "title": "defaced" },
        UpdateOptions::default(),
    );
    assert_eq!(update.unwrap_err().kind(), &ErrorKind::AccessDenied);
}

#[test]
fn test_authoritative_path_is_not_access_controlled() {
    let factory = create_test_factory();
    let collection = factory
        .create_collection(CreationParams::new("books"))
        .unwrap();

    // The default deny rule applies to the untrusted path only.
    collection.insert(doc! { "title": "Dune" }).unwrap();
    collection
        .update(all(), doc! { "checked": true }, UpdateOptions::default())
        .unwrap();
    assert_eq!(collection.remove(all()).unwrap(), 1);
}
