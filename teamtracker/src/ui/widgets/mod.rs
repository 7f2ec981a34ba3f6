//! Reusable UI widgets.

pub mod forms;
pub mod team_card;
