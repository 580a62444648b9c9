//! Recipe Search Form - Entry Point
//!
//! Runs the recipe search page in the terminal, validating the must-have
//! ingredients field before each search is submitted.

use log::info;
use tokio::io::{BufReader, stdin, stdout};

use recipe_search_form::SearchPage;
use recipe_search_form::config::AppConfig;
use recipe_search_form::error::AppError;
use recipe_search_form::error::handlers::{error_to_exit_code, handle_error};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(error_to_exit_code(&e));
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    info!(
        "Launching search page (form {}, field {})",
        config.page.form_id, config.page.field_id
    );

    let mut page = SearchPage::new(&config);
    let mut out = stdout();
    page.run(BufReader::new(stdin()), &mut out).await
}
