//! Record extraction: study-set pages → question/answer pairs.
//!
//! [`RecordExtractor`] is the seam the pipeline uses to obtain records for
//! one source. [`StudySetExtractor`] fetches a Quizlet-style study set page
//! over HTTP and reads its term cards with CSS selectors.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::CandidateRecord;
use scraper::{ElementRef, Html, Selector};

/// Prompt used when a card has no readable question side.
pub const MISSING_PROMPT: &str = "No question found";

/// Response used when a card has no readable answer side.
pub const MISSING_RESPONSE: &str = "No answer found";

/// One term card on a study set page.
const TERM_SELECTOR: &str = r#"div[aria-label="Term"].SetPageTerms-term"#;

/// Question text: the first card side's term text.
const PROMPT_SELECTOR: &str = r#"div[data-testid="set-page-card-side"]:first-child span.TermText"#;

/// Answer text: the last card side's term text.
const RESPONSE_SELECTOR: &str = r#"div[data-testid="set-page-card-side"]:last-child span.TermText"#;

/// Produces candidate records for a single source page.
///
/// Implementations must be `Send + Sync`; the pipeline extracts several
/// sources concurrently from one shared extractor.
pub trait RecordExtractor: Send + Sync {
    /// Extract all records from the page identified by `source`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the page cannot be fetched or does not
    /// contain the expected content. The pipeline treats any error as
    /// "zero records for this source".
    fn extract(
        &self,
        source: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<CandidateRecord>, SearchError>> + Send;
}

/// HTTP + CSS selector extractor for study set pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudySetExtractor;

impl RecordExtractor for StudySetExtractor {
    async fn extract(
        &self,
        source: &str,
        config: &SearchConfig,
    ) -> Result<Vec<CandidateRecord>, SearchError> {
        tracing::trace!(source, "fetching study set");

        let client = http::build_client(config)?;
        let html = http::fetch_text(client.get(source), "study set").await?;

        parse_study_set_html(&html, source)
    }
}

/// Parse the term cards of a study set page.
///
/// The card side that is the first child of its parent holds the prompt and
/// the one that is the last child holds the response; a side without text
/// falls back to [`MISSING_PROMPT`] / [`MISSING_RESPONSE`].
///
/// # Errors
///
/// Returns [`SearchError::SourceExtractionFailed`] if the page has no term
/// cards at all.
pub fn parse_study_set_html(html: &str, source: &str) -> Result<Vec<CandidateRecord>, SearchError> {
    let document = Html::parse_document(html);

    let term_sel = selector(TERM_SELECTOR)?;
    let prompt_sel = selector(PROMPT_SELECTOR)?;
    let response_sel = selector(RESPONSE_SELECTOR)?;

    let records: Vec<CandidateRecord> = document
        .select(&term_sel)
        .map(|term| {
            let prompt = first_text(term, &prompt_sel)
                .unwrap_or_else(|| MISSING_PROMPT.to_owned());
            let response = first_text(term, &response_sel)
                .unwrap_or_else(|| MISSING_RESPONSE.to_owned());
            CandidateRecord::scraped(prompt, response, source)
        })
        .collect();

    if records.is_empty() {
        return Err(SearchError::SourceExtractionFailed {
            origin: source.to_owned(),
            reason: "no terms found".into(),
        });
    }

    tracing::debug!(source, count = records.len(), "study set parsed");
    Ok(records)
}

fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("invalid selector {css}: {e:?}")))
}

/// Whitespace-collapsed text of the first match under `term`, if non-blank.
fn first_text(term: ElementRef<'_>, text_sel: &Selector) -> Option<String> {
    let span = term.select(text_sel).next()?;
    let text = span.text().collect::<Vec<_>>().join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!text.is_empty()).then_some(text)
}
