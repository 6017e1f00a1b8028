use anyhow::Result;
use dialoguer::{Confirm, Input};
use owo_colors::{OwoColorize, Style};

use haru_core::board::GoalBoard;
use haru_core::error::CoreError;
use haru_core::extract::GoalExtractor;
use haru_core::resolver;
use haru_core::zone;

use crate::views::table;

/// Interactive session loop. Each accepted line is handled to completion and
/// followed by one full redraw of the board; free text submits a goal, the
/// rest are the board commands.
pub async fn run(extractor: &impl GoalExtractor, board: &mut GoalBoard) -> Result<()> {
    println!("하루 목표 리마인더");
    println!("Type a goal sentence, or: done N · clear · list · quit");

    loop {
        let line: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();

        match line {
            "" | "list" => {}
            "quit" | "exit" => break,
            "clear" => {
                let confirmed = Confirm::new()
                    .with_prompt("Delete all goals?")
                    .default(false)
                    .interact()
                    .unwrap_or(false);
                if confirmed {
                    board.clear_all();
                    println!("All goals deleted.");
                }
            }
            _ => {
                if let Some(rest) = line.strip_prefix("done") {
                    mark_done(board, rest);
                } else if let Err(e) = submit(extractor, board, line).await {
                    print_submission_error(&e);
                }
            }
        }

        table::display_board(board, zone::now());
    }

    Ok(())
}

/// Non-interactive counterpart of one page interaction: submit a single
/// sentence, print the board, exit.
pub async fn submit_once(
    extractor: &impl GoalExtractor,
    board: &mut GoalBoard,
    sentence: &str,
) -> Result<()> {
    submit(extractor, board, sentence).await?;
    table::display_board(board, zone::now());
    Ok(())
}

/// Extract, resolve, and append one goal. Extraction failures drop the
/// submission; a fallback resolution still registers the goal but warns.
async fn submit(
    extractor: &impl GoalExtractor,
    board: &mut GoalBoard,
    sentence: &str,
) -> Result<(), CoreError> {
    let now = zone::now();
    let extracted = extractor.extract(sentence).await?;

    let resolution = resolver::resolve(&extracted.deadline, now);
    if resolution.is_fallback() {
        println!(
            "{} could not read a time from '{}'; assuming one hour from now.",
            "Warning:".style(Style::new().yellow().bold()),
            extracted.deadline
        );
    }

    let goal = board.submit(extracted.goal, resolution.deadline(), now);
    println!(
        "{} Registered goal: {} (due {})",
        "✓".style(Style::new().green().bold()),
        goal.description.bold(),
        zone::format_deadline(goal.deadline, now).cyan()
    );

    Ok(())
}

/// Handle `done N`, where N is the 1-based row number of the displayed table.
fn mark_done(board: &mut GoalBoard, argument: &str) {
    match argument.trim().parse::<usize>() {
        Ok(position) if position >= 1 => match board.mark_done(position - 1) {
            Ok(goal) => println!("Completed goal: '{}'", goal.description),
            Err(e) => print_submission_error(&e),
        },
        _ => println!("Usage: done N (row number from the table)"),
    }
}

fn print_submission_error(err: &CoreError) {
    println!(
        "{} {}",
        "Error:".style(Style::new().red().bold()),
        err
    );
}
