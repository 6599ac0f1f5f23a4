//! Shared helpers for integration tests.

pub mod mock;

use std::sync::Arc;

use fabrica::{
    model::app::AppState,
    service::{language::LanguageRegistry, storage::FileStorage},
};
use fabrica_test_utils::TestContext;

pub static TEST_JWT_SECRET: &str = "integration-test-secret";

/// Builds an [`AppState`] over the test database, a recording mailer and a
/// throwaway uploads directory.
pub fn app_state(test: &TestContext) -> (AppState, Arc<mock::RecordingMailer>) {
    let mailer = Arc::new(mock::RecordingMailer::default());

    let state = AppState {
        db: test.db.clone(),
        languages: LanguageRegistry::default(),
        storage: FileStorage::new(test.upload_dir.path()),
        mailer: mailer.clone(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
    };

    (state, mailer)
}

/// Claims for handlers that take the admin extractor directly.
pub fn admin_claims() -> fabrica::model::auth::AdminClaims {
    fabrica::model::auth::AdminClaims {
        sub: 1,
        username: "editor".to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp(),
    }
}
