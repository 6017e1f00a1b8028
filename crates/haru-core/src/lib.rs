//! # Haru Core Library
//!
//! Goal tracking for a single interactive session: a free-text Korean
//! sentence becomes a structured goal with an absolute deadline. An LLM
//! collaborator extracts the goal description and the raw deadline phrase;
//! the phrase is resolved locally by a small rule engine, and the resulting
//! goals live in an in-memory board with a deadline-sorted view.
//!
//! ## Core Modules
//!
//! - [`models`]: goal record and extraction wire types
//! - [`resolver`]: Korean deadline-phrase rule engine
//! - [`board`]: in-memory goal collection with a deadline-sorted view
//! - [`extract`]: LLM-backed goal extraction
//! - [`zone`]: fixed-zone (KST) clock and display helpers
//! - [`error`]: error types
//!
//! ## Example Usage
//!
//! ```rust
//! use haru_core::{board::GoalBoard, resolver, zone};
//!
//! let now = zone::at(2025, 5, 13, 10, 0, 0).unwrap();
//! let mut board = GoalBoard::new();
//!
//! let resolution = resolver::resolve("오늘 오후 6시", now);
//! assert!(!resolution.is_fallback());
//!
//! board.submit("보고서 작성".to_string(), resolution.deadline(), now);
//! let view = board.list_sorted(now);
//! assert_eq!(view.len(), 1);
//! assert!(!view[0].1); // not overdue at 10:00
//! ```

pub mod board;
pub mod error;
pub mod extract;
pub mod models;
pub mod resolver;
pub mod zone;
