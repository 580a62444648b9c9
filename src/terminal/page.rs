//! Search page session
//!
//! One page lifetime: a single validator, fed by repeated form submissions
//! read from the terminal.

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::region::TerminalErrorRegion;
use crate::config::{AppConfig, PageConfig, SearchConfig};
use crate::error::AppError;
use crate::form::{SearchFormValidator, SubmissionOutcome, SubmitEvent};
use crate::search::{SearchForm, SearchQuery};

/// The recipe search page.
pub struct SearchPage {
    page: PageConfig,
    search: SearchConfig,
    validator: SearchFormValidator<SearchForm, TerminalErrorRegion>,
}

impl SearchPage {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            page: config.page.clone(),
            search: config.search.clone(),
            validator: SearchFormValidator::new(
                SearchForm::default(),
                TerminalErrorRegion::default(),
            ),
        }
    }

    pub fn error_region(&self) -> &TerminalErrorRegion {
        self.validator.sink()
    }

    /// Runs the page until the input ends.
    ///
    /// Each round prompts for every form field and submits the form. A blocked
    /// submission renders the error region; a passing one prints the results
    /// request and the recipe API request, then starts a fresh page.
    pub async fn run<R, W>(&mut self, mut reader: R, writer: &mut W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            writer
                .write_all(format!("== {} ==\n", self.page.form_id).as_bytes())
                .await?;

            let mut form = SearchForm::default();
            for name in SearchForm::FIELDS {
                let label = if name == "need_to_have" {
                    self.page.field_id.as_str()
                } else {
                    name
                };
                writer.write_all(format!("{}: ", label).as_bytes()).await?;
                writer.flush().await?;

                buf.clear();
                if reader.read_until(b'\n', &mut buf).await? == 0 {
                    writer.write_all(b"\n").await?;
                    writer.flush().await?;
                    return Ok(());
                }
                if let Some(field) = form.field_mut(name) {
                    *field = decode_line(&buf);
                }
            }

            self.submit(form, writer).await?;
        }
    }

    async fn submit<W>(&mut self, form: SearchForm, writer: &mut W) -> Result<(), AppError>
    where
        W: AsyncWrite + Unpin,
    {
        self.validator.replace_source(form);
        let mut event = SubmitEvent::new(self.page.form_id.as_str());

        match self.validator.on_submit(&mut event) {
            SubmissionOutcome::Blocked(_) => {
                if let Some(line) = self.error_region().render(&self.page.error_display_id) {
                    writer.write_all(line.as_bytes()).await?;
                }
            }
            SubmissionOutcome::Proceed => {
                let query = SearchQuery::from_form(self.validator.source());
                let results = query.results_url(&self.search)?;
                let upstream = query.upstream_url(&self.search)?;
                info!(
                    "Search submitted for {:?}: {}",
                    query.form().need_to_have,
                    results
                );

                writer
                    .write_all(format!("GET {}\n", results).as_bytes())
                    .await?;
                writer
                    .write_all(format!("recipes: {}\n", upstream).as_bytes())
                    .await?;

                // Navigating away loads a page with an empty error region
                self.validator.reset_region();
            }
        }

        writer.flush().await?;
        Ok(())
    }
}

/// One typed line without its line ending. Bytes that are not UTF-8 become
/// U+FFFD, which the must-have rule rejects like any other bad character.
fn decode_line(buf: &[u8]) -> String {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_page(input: &str) -> (SearchPage, String) {
        run_page_bytes(input.as_bytes()).await
    }

    async fn run_page_bytes(input: &[u8]) -> (SearchPage, String) {
        let mut page = SearchPage::new(&AppConfig::default());
        let mut output: Vec<u8> = Vec::new();
        page.run(input, &mut output).await.unwrap();
        (page, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_valid_submission_prints_requests() {
        let (page, output) = run_page("chicken, rice\n30\n\n\n\n\n\n").await;

        assert!(output.contains("GET http://127.0.0.1:5000/recipe/search/results?need_to_have=chicken%2C+rice&max_time=30"));
        assert!(output.contains("recipes: https://api.spoonacular.com/recipes/complexSearch?number=21&instructionsRequired=true&includeIngredients=chicken%2C+rice&maxReadyTime=30\n"));
        assert!(!output.contains("[error_display]"));
        assert_eq!(page.error_region().text(), None);
    }

    #[tokio::test]
    async fn test_invalid_submission_shows_error() {
        let (page, output) = run_page("chicken & rice\n\n\n\n\n\n\n").await;

        assert!(output.contains(
            "[error_display] invalid character in must-have ingredients. please try again!\n"
        ));
        assert!(!output.contains("GET "));
        assert!(page.error_region().text().is_some());
    }

    #[tokio::test]
    async fn test_other_fields_are_not_validated() {
        let (_, output) = run_page("eggs\n\n<nuts>\n\n\n\n\n").await;
        assert!(output.contains("GET "));
        assert!(output.contains("excludeIngredients=%3Cnuts%3E"));
    }

    #[tokio::test]
    async fn test_eof_mid_form_ends_page() {
        let (_, output) = run_page("eggs\n").await;
        assert!(output.starts_with("== search_form ==\nneed_to_have: max_time: "));
        assert!(!output.contains("GET "));
    }

    #[tokio::test]
    async fn test_non_utf8_field_is_rejected_not_fatal() {
        let (page, output) =
            run_page_bytes(b"chick\xffen\n\n\n\n\n\n\nchicken\n\n\n\n\n\n\n").await;

        let error_at = output
            .find("[error_display] invalid character in must-have ingredients. please try again!")
            .expect("error region rendered");
        let get_at = output
            .find("GET http://127.0.0.1:5000/recipe/search/results?need_to_have=chicken&")
            .expect("corrected form submitted");
        assert!(error_at < get_at);
        assert_eq!(page.error_region().text(), None);
    }

    #[tokio::test]
    async fn test_crlf_line_endings_are_stripped() {
        let (_, output) = run_page("eggs\r\n\r\n\r\n\r\n\r\n\r\n\r\n").await;
        assert!(output.contains("includeIngredients=eggs\n"));
        assert!(!output.contains("[error_display]"));
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"rice\r\n"), "rice");
        assert_eq!(decode_line(b"rice"), "rice");
        assert_eq!(decode_line(b"ri\xffce\n"), "ri\u{FFFD}ce");
    }
}
