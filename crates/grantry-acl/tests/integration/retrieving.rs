//! Query narrowing, gating, and sanitizing on read.

use grantry_acl::{AclOptions, Denial};
use grantry_storage::{DocumentStore, Query};
use serde_json::json;

use crate::common::{AUTHOR_ID, articles, collection};

#[tokio::test]
async fn test_anonymous_sees_public_articles() {
    let (acl, store) = collection(AclOptions::new());
    store.insert_many(articles()).await.unwrap();

    let query = acl.restrict_query(Query::new(), None);
    let found = store.find(&query).await.unwrap();
    assert_eq!(found.len(), 3);

    let auth = acl.authorize(None);
    assert_eq!(auth.retain_authorized(found).len(), 3);
}

#[tokio::test]
async fn test_author_sees_only_own_articles() {
    let (acl, store) = collection(
        AclOptions::new()
            .with_default_grants(Vec::<String>::new())
            .with_author_grant(true),
    );
    store.insert_many(articles()).await.unwrap();

    let author = json!({"_id": AUTHOR_ID, "name": "Ann"});
    let query = acl.restrict_query(Query::new(), Some(&author));
    let found = store.find(&query).await.unwrap();
    assert_eq!(found.len(), 2);

    let anonymous = acl.restrict_query(Query::new(), None);
    assert!(store.find(&anonymous).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_restriction_combines_with_other_conditions() {
    let (acl, store) = collection(AclOptions::new().with_author_grant(true));
    store.insert_many(articles()).await.unwrap();
    store
        .insert(json!({"title": "Sed do eiusmod tempor", "grants": ["admin"]}))
        .await
        .unwrap();

    let query = Query::new().where_eq("title", json!("Sed do eiusmod tempor"));
    let query = acl.restrict_query(query, None);
    let found = store.find(&query).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["grants"], json!(["admin", "public"]));
}

#[tokio::test]
async fn test_gate_on_get() {
    let (acl, store) = collection(AclOptions::new());
    let doc = store
        .insert(json!({"_id": "a1", "title": "Internal", "grants": ["admin"]}))
        .await
        .unwrap();
    assert_eq!(doc["_id"], json!("a1"));

    let stored = store.get("a1").await.unwrap().unwrap();
    assert_eq!(
        acl.authorize(None).check(stored.clone()),
        Err(Denial::Unauthorized)
    );

    let editor = json!({"_id": "u2", "grants": ["editor"]});
    assert_eq!(
        acl.authorize(Some(&editor)).check(stored.clone()),
        Err(Denial::Forbidden)
    );

    let admin = json!({"_id": "u3", "grants": ["admin"]});
    assert_eq!(acl.authorize(Some(&admin)).check(stored.clone()), Ok(stored));
}

#[tokio::test]
async fn test_nested_grants_narrow_the_gate() {
    let (acl, store) = collection(AclOptions::new());
    let doc = store
        .insert(json!({
            "title": "Release notes",
            "draft": {"grants": ["admin"], "body": "unreleased"}
        }))
        .await
        .unwrap();

    let found = store
        .find(&acl.restrict_query(Query::new(), None))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    let auth = acl.authorize(None);
    assert_eq!(auth.check(doc), Err(Denial::Unauthorized));
    assert!(auth.retain_authorized(found).is_empty());
}

#[tokio::test]
async fn test_sanitize_stored_document() {
    let (acl, store) = collection(AclOptions::new());
    store
        .insert(json!({
            "_id": "558d4ec48d77c9f0b3ba2001",
            "title": "A Document",
            "parent": {
                "_id": "558d4ec48d77c9f0b3ba2000",
                "grants": ["admin"],
                "title": "I'm the parent obj"
            },
            "grants": ["admin", "public"]
        }))
        .await
        .unwrap();

    let user = json!({"_id": "u9", "grants": ["public"]});
    let stored = store.get("558d4ec48d77c9f0b3ba2001").await.unwrap().unwrap();
    let clean = acl.authorize(Some(&user)).sanitize(&stored);

    assert_eq!(
        clean,
        json!({
            "_id": "558d4ec48d77c9f0b3ba2001",
            "title": "A Document",
            "parent": {"grants": ["admin"]},
            "grants": ["admin", "public"]
        })
    );
}
