//! Static front end serving with single-page-app fallback.

use tower_http::services::{ServeDir, ServeFile};

use crate::config::Config;

/// Serves files from the static directory; unknown paths get `index.html`.
pub fn spa_service(config: &Config) -> ServeDir<ServeFile> {
    ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()))
}
