use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("failed to read model artifact {path}: {source}")]
    ModelIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model artifact {path}: {source}")]
    ModelJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("model artifacts are inconsistent: {0}")]
    ModelShape(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column \"{column}\" not found (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("Please provide both URLs")]
    MissingUrl,

    #[error(
        "Could not find enough reviews from Product {product}. Try a different URL or use CSV upload."
    )]
    InsufficientReviews {
        product: u8,
        found: usize,
        minimum: usize,
    },

    #[error("none of the reviews from Product {product} could be classified")]
    Unclassified { product: u8 },
}
