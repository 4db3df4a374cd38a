//! Format-agnostic logic shared by every export format.

pub mod inline;
pub mod outline;
