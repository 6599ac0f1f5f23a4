use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::service::{contact::Mailer, language::LanguageRegistry, storage::FileStorage};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub languages: LanguageRegistry,
    pub storage: FileStorage,
    pub mailer: Arc<dyn Mailer>,
    pub jwt_secret: String,
}
