//! Page components for the web interface

pub mod dashboard;
pub mod issue_list;
pub mod not_found;
pub mod submit_issue;
pub mod tenant_select;
