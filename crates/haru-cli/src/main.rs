use clap::Parser;
use owo_colors::{OwoColorize, Style};

use haru_core::board::GoalBoard;
use haru_core::error::CoreError;
use haru_core::extract::GeminiExtractor;

mod cli;
mod config;
mod session;
mod views;

#[tokio::main]
async fn main() {
    let args = cli::Cli::parse();
    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());

    let api_key = match config.resolve_api_key() {
        Some(key) => key,
        None => {
            handle_error(CoreError::MissingApiKey.into());
            std::process::exit(1);
        }
    };
    let model = args.model.unwrap_or(config.model);

    let extractor = GeminiExtractor::new(api_key, model);
    let mut board = GoalBoard::new();

    let result = match args.once {
        Some(sentence) => session::submit_once(&extractor, &mut board, &sentence).await,
        None => session::run(&extractor, &mut board).await,
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::MissingApiKey) => {
            eprintln!("{} {}", "Error:".style(error_style), CoreError::MissingApiKey);
        }
        Some(CoreError::InvalidInput(s)) => {
            eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
        }
        Some(core_error) => {
            eprintln!("{} {}", "Error:".style(error_style), core_error);
        }
        None => eprintln!("{} {}", "Error:".style(error_style), err),
    }
}
