//! CLI command implementations

pub(crate) mod info;
pub(crate) mod run;
