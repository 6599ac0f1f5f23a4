use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    error::Error,
    service::{contact::SmtpMailer, storage::FileStorage},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Prepare the uploads directory and the storage handle
pub async fn build_storage(config: &Config) -> Result<FileStorage, Error> {
    let storage = FileStorage::new(&config.upload_dir);

    tokio::fs::create_dir_all(storage.root())
        .await
        .map_err(crate::error::storage::StorageError::from)?;

    Ok(storage)
}

/// Build the SMTP mailer from the configured relay settings
pub fn build_mailer(config: &Config) -> Result<Arc<SmtpMailer>, Error> {
    Ok(Arc::new(SmtpMailer::from_config(config)?))
}
