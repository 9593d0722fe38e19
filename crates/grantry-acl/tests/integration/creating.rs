//! Grant assignment and validation on insert and save.

use grantry_acl::{AclOptions, Error};
use grantry_storage::DocumentStore;
use serde_json::json;

use crate::common::{AUTHOR_ID, articles, collection, grants_of};

#[tokio::test]
async fn test_new_documents_get_default_grants() {
    let (_, store) = collection(AclOptions::new());
    let saved = store.insert_many(articles()).await.unwrap();

    assert_eq!(saved.len(), 3);
    for doc in &saved {
        assert_eq!(grants_of(doc), ["admin", "public"]);
    }
}

#[tokio::test]
async fn test_author_grant_added_when_enabled() {
    let (_, store) = collection(AclOptions::new().with_author_grant(true));
    let saved = store.insert_many(articles()).await.unwrap();

    let author = format!("author-{AUTHOR_ID}");
    assert_eq!(grants_of(&saved[0]), ["admin", "public", author.as_str()]);
    assert_eq!(grants_of(&saved[1]), ["admin", "public", author.as_str()]);
    assert_eq!(grants_of(&saved[2]), ["admin", "public"]);
}

#[tokio::test]
async fn test_explicit_grants_are_kept() {
    let (_, store) = collection(AclOptions::new());
    let doc = store
        .insert(json!({"title": "Staff only", "grants": ["admin", "staff"]}))
        .await
        .unwrap();
    assert_eq!(grants_of(&doc), ["admin", "staff"]);
}

#[tokio::test]
async fn test_insert_missing_required_grant_rejected() {
    let (_, store) = collection(AclOptions::new());
    let err = store
        .insert(json!({"title": "Nope", "grants": ["public"]}))
        .await
        .unwrap_err();

    match &err {
        Error::MissingRequiredGrants { missing } => assert_eq!(missing, &["admin"]),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.to_string(), "Missing required grants: admin");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_save_with_grants_removed_rejected() {
    let (_, store) = collection(AclOptions::new());
    let mut doc = store.insert(articles().remove(0)).await.unwrap();
    let id = doc["_id"].as_str().unwrap().to_string();

    doc.as_object_mut().unwrap().remove("grants");
    let err = store.save(doc).await.unwrap_err();
    assert!(matches!(err, Error::MissingRequiredGrants { .. }));

    let stored = store.get(&id).await.unwrap().unwrap();
    assert_eq!(grants_of(&stored), ["admin", "public"]);
}

#[tokio::test]
async fn test_save_keeps_modified_grants() {
    let (_, store) = collection(AclOptions::new());
    let mut doc = store.insert(articles().remove(2)).await.unwrap();

    doc["grants"] = json!(["admin"]);
    let saved = store.save(doc).await.unwrap();
    assert_eq!(grants_of(&saved), ["admin"]);
}

#[tokio::test]
async fn test_save_restores_author_grant() {
    let (_, store) = collection(AclOptions::new().with_author_grant(true));
    let mut doc = store.insert(articles().remove(0)).await.unwrap();

    doc["grants"] = json!(["admin"]);
    let saved = store.save(doc).await.unwrap();
    let author = format!("author-{AUTHOR_ID}");
    assert_eq!(grants_of(&saved), ["admin", author.as_str()]);
}

#[tokio::test]
async fn test_custom_required_grants() {
    let (acl, store) = collection(
        AclOptions::new()
            .with_required_grants(["ops"])
            .with_default_grants(["staff"]),
    );
    assert_eq!(acl.config().default_grants().to_string(), "[staff,ops]");

    let doc = store.insert(json!({"title": "Runbook"})).await.unwrap();
    assert_eq!(grants_of(&doc), ["staff", "ops"]);

    let err = store
        .insert(json!({"title": "Bad", "grants": ["staff"]}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Missing required grants: ops");
}

#[tokio::test]
async fn test_single_string_grant_is_not_widened() {
    let (acl, store) = collection(AclOptions::new());
    let doc = store
        .insert(json!({"title": "Private", "grants": "admin"}))
        .await
        .unwrap();
    assert_eq!(grants_of(&doc), ["admin"]);

    assert!(acl.authorize(None).check(doc).is_err());
}
