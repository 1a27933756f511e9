//! Imports course materials from a shared Google Drive folder tree into the
//! catalog database.
//!
//! All configuration comes from the environment (optionally via a `.env`
//! file). The process exits non-zero if any stage of the import fails;
//! re-running it is safe because every database write is a keyed upsert.

use std::sync::Arc;

use core_auth::{ServiceAccountCredentials, TokenExchanger, TokenManager};
use core_catalog::{
    create_pool, DatabaseConfig, PgCourseRepository, PgMaterialRepository,
};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use core_runtime::ImporterConfig;
use core_sync::{ImportCoordinator, ImportStats};
use provider_google_drive::DriveClient;
use tracing::error;

/// Optional environment variable selecting the log output format.
const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let format = match std::env::var(LOG_FORMAT_VAR) {
        Ok(value) => value.parse::<LogFormat>()?,
        Err(_) => LogFormat::default(),
    };
    init_logging(LoggingConfig::default().with_format(format))?;

    let config = ImporterConfig::from_env()?;

    match import(config).await {
        Ok(_stats) => Ok(()),
        Err(import_error) => {
            error!("Import failed: {import_error:#}");
            Err(import_error)
        }
    }
}

async fn import(config: ImporterConfig) -> anyhow::Result<ImportStats> {
    let pool = create_pool(DatabaseConfig::new(&config.database_url)).await?;

    let http = reqwest::Client::new();
    let credentials = ServiceAccountCredentials::new(
        config.service_account_email,
        config.service_account_key,
    );
    let auth = Arc::new(TokenManager::new(TokenExchanger::new(
        http.clone(),
        credentials,
    )));

    let drive = Arc::new(DriveClient::new(http, auth));
    let courses = Arc::new(PgCourseRepository::new(pool.clone()));
    let materials = Arc::new(PgMaterialRepository::new(pool));

    let coordinator = ImportCoordinator::new(drive, courses, materials);
    let stats = coordinator.run(&config.root_folder_id).await?;
    Ok(stats)
}
