use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Directory holding `tfidf.json` and `clf.json`.
    pub model_dir: PathBuf,
    pub scraper_request_timeout_secs: u64,
    /// Default cap handed to the extraction dispatcher.
    pub max_reviews: usize,
    /// Per-side minimum for the comparison flow.
    pub min_reviews_for_compare: usize,
}
