#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;

use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::words::WordList;
use backend_test_support::unique_helpers::unique_name;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh migrated in-memory database whose word source always yields `word`.
pub async fn state_with_word(word: &str) -> AppState {
    let words = WordList::from_words([word]).expect("non-empty word list");
    build_state()
        .with_db(DbProfile::InMemory)
        .with_words(Arc::new(words))
        .build()
        .await
        .expect("build in-memory state")
}

/// In-memory state playing `cat`.
pub async fn test_state() -> AppState {
    state_with_word("cat").await
}

/// Register a user with a unique name and return that name.
pub async fn seed_user(state: &AppState, prefix: &str) -> String {
    let name = unique_name(prefix);
    let db = state.db().expect("state has a database");
    backend::services::users::create_user(db, &name, None)
        .await
        .expect("create user");
    name
}
