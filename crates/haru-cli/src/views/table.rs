use chrono::DateTime;
use chrono_tz::Tz;
use comfy_table::{Attribute, Cell, Color, Row, Table};

use haru_core::board::GoalBoard;
use haru_core::zone;

/// Render the deadline-sorted board. Row numbers are 1-based and are the
/// handles `done N` accepts.
pub fn display_board(board: &GoalBoard, now: DateTime<Tz>) {
    let entries = board.list_sorted(now);
    if entries.is_empty() {
        println!("No goals yet. Type a sentence like '오후 6시까지 보고서 작성'.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Goal", "Due", "Status"]);

    for (position, (goal, overdue)) in entries.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(position + 1));

        let mut name_cell = Cell::new(&goal.description);
        if goal.done {
            name_cell = name_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        } else if *overdue {
            name_cell = name_cell.fg(Color::Red).add_attribute(Attribute::Bold);
        }
        row.add_cell(name_cell);

        let due_text = zone::format_deadline(goal.deadline, now);
        let due_cell = if *overdue {
            Cell::new(due_text).fg(Color::Red)
        } else {
            Cell::new(due_text)
        };
        row.add_cell(due_cell);

        let status_cell = if goal.done {
            Cell::new("done").fg(Color::Green)
        } else if *overdue {
            Cell::new("overdue!").fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            Cell::new("in progress")
        };
        row.add_cell(status_cell);

        table.add_row(row);
    }

    println!("{table}");
}
