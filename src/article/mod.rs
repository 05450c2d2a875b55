//! Article content source.
//!
//! Fetches article text over HTTP (or reads it from a file or stdin), strips
//! HTML tags and turns the result into the lowercase word list the renderers
//! consume.

/// HTTP client for article JSON endpoints
pub mod api;
/// Tag stripping and tokenization
pub mod text;

pub use api::ArticleClient;
pub use text::{clean_html, generate_word_list, words_from_html};

use tokio::io::AsyncReadExt;

use crate::error::Result;
use crate::types::WordSource;

/// Resolve a word source into the list of words to display.
pub async fn load_words(source: &WordSource, client: &ArticleClient) -> Result<Vec<String>> {
    let raw = match source {
        WordSource::Url(url) => client.fetch_body(url).await?,
        WordSource::File(path) => fs_err::read_to_string(path)?,
        WordSource::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let words = words_from_html(&raw);
    tracing::info!("Loaded {} words from {source}", words.len());
    Ok(words)
}
