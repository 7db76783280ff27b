//! CLI command implementations

pub(crate) mod budget;
pub(crate) mod common;
pub(crate) mod dashboard;
pub(crate) mod format_helpers;
pub(crate) mod ls;
pub(crate) mod show;
