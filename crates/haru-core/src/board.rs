//! In-memory goal collection for one interactive session.
//!
//! The underlying order is insertion order and is never rearranged; sorting
//! by deadline is a derived view. There is no persistence, process restart
//! discards the board by design.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::error::CoreError;
use crate::models::Goal;

#[derive(Debug, Default)]
pub struct GoalBoard {
    goals: Vec<Goal>,
}

impl GoalBoard {
    pub fn new() -> Self {
        Self { goals: Vec::new() }
    }

    /// Append a goal. Pure append: no dedup, no validation beyond what
    /// deadline resolution already performed.
    pub fn submit(
        &mut self,
        description: String,
        deadline: DateTime<Tz>,
        now: DateTime<Tz>,
    ) -> &Goal {
        self.goals.push(Goal::new(description, deadline, now));
        &self.goals[self.goals.len() - 1]
    }

    /// Flip `done` on the goal at `sorted_index` of the current
    /// deadline-sorted view. The displayed position is mapped back to the
    /// underlying insertion-order record before mutating.
    pub fn mark_done(&mut self, sorted_index: usize) -> Result<&Goal, CoreError> {
        let order = self.sorted_order();
        let underlying = *order.get(sorted_index).ok_or_else(|| {
            CoreError::InvalidInput(format!("no goal at position {}", sorted_index + 1))
        })?;
        self.goals[underlying].done = true;
        Ok(&self.goals[underlying])
    }

    /// Discard every goal unconditionally.
    pub fn clear_all(&mut self) {
        self.goals.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Goals ordered by non-decreasing deadline, stable with respect to
    /// insertion order on ties, each paired with its overdue flag
    /// (`!done && now >= deadline`).
    pub fn list_sorted(&self, now: DateTime<Tz>) -> Vec<(&Goal, bool)> {
        self.sorted_order()
            .into_iter()
            .map(|i| {
                let goal = &self.goals[i];
                (goal, !goal.done && now >= goal.deadline)
            })
            .collect()
    }

    /// Indexes into `goals` in deadline order; `sort_by_key` is stable, so
    /// ties keep insertion order.
    fn sorted_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.goals.len()).collect();
        order.sort_by_key(|&i| self.goals[i].deadline);
        order
    }
}
