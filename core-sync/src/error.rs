use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Drive error: {0}")]
    Drive(#[from] provider_google_drive::DriveError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] core_catalog::CatalogError),
}

pub type Result<T> = std::result::Result<T, ImportError>;
