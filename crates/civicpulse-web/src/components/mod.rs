//! Reusable view components

pub mod charts;
pub mod filters;
pub mod issue_card;
pub mod loading;
pub mod navbar;
