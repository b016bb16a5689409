/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Error reading CSV file: {0}")]
    CatalogLoad(#[source] std::io::Error),

    #[error("Input stream closed before a selection was made")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
