//! Behaviour every [`RepoStore`] must share.
//!
//! Each check uses remotes under a caller-supplied `prefix`, so the same
//! suite can run against a shared database without tests seeing each
//! other's records.

#![allow(clippy::panic)]

use super::{GitRepo, RepoStore, StoreError};

fn repo(prefix: &str, remote: &str, branch: &str) -> GitRepo {
    GitRepo::new(format!("{prefix}/{remote}"), branch)
}

async fn own_records(store: &dyn RepoStore, prefix: &str) -> Vec<GitRepo> {
    let Ok(all) = store.list().await else {
        panic!("list succeeds");
    };
    let mut own: Vec<GitRepo> = all
        .into_iter()
        .filter(|r| r.remote.starts_with(prefix))
        .collect();
    own.sort();
    own
}

pub(crate) async fn create_then_get_round_trips(store: &dyn RepoStore, prefix: &str) {
    let created = repo(prefix, "r1", "main");
    assert!(store.create(&created).await.is_ok());

    let Ok(fetched) = store.get(&created.remote, "main").await else {
        panic!("created repo is readable");
    };
    assert_eq!(fetched, created);
}

pub(crate) async fn duplicate_create_is_rejected(store: &dyn RepoStore, prefix: &str) {
    let first = repo(prefix, "dup", "main");
    assert!(store.create(&first).await.is_ok());

    let second = store.create(&first).await;
    assert!(
        matches!(&second, Err(StoreError::DuplicateKey { remote, branch })
            if *remote == first.remote && branch == "main"),
        "expected DuplicateKey, got {second:?}"
    );

    assert_eq!(own_records(store, prefix).await, vec![first]);
}

pub(crate) async fn same_remote_other_branch_is_distinct(store: &dyn RepoStore, prefix: &str) {
    let main = repo(prefix, "multi", "main");
    let dev = repo(prefix, "multi", "dev");
    assert!(store.create(&main).await.is_ok());
    assert!(store.create(&dev).await.is_ok());

    let Ok(fetched) = store.get(&dev.remote, "dev").await else {
        panic!("dev branch is readable");
    };
    assert_eq!(fetched, dev);
    assert_eq!(own_records(store, prefix).await.len(), 2);
}

pub(crate) async fn missing_record_is_not_found(store: &dyn RepoStore, prefix: &str) {
    let remote = format!("{prefix}/nonexistent");
    let result = store.get(&remote, "main").await;

    assert!(
        matches!(&result, Err(e) if e.is_not_found()),
        "expected NotFound, got {result:?}"
    );
}

pub(crate) async fn get_filters_on_branch(store: &dyn RepoStore, prefix: &str) {
    let main = repo(prefix, "branchy", "main");
    assert!(store.create(&main).await.is_ok());

    let result = store.get(&main.remote, "release").await;
    assert!(
        matches!(&result, Err(e) if e.is_not_found()),
        "expected NotFound, got {result:?}"
    );
}

pub(crate) async fn list_returns_every_record(store: &dyn RepoStore, prefix: &str) {
    let a = repo(prefix, "a", "1");
    let b = repo(prefix, "b", "2");
    assert!(store.create(&b).await.is_ok());
    assert!(store.create(&a).await.is_ok());

    assert_eq!(own_records(store, prefix).await, vec![a, b]);
}
