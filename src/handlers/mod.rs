//! Command handlers for the tracker shell
//!
//! Each handler lives in its own file and returns the text shown to the user.

pub mod add;
pub mod change_status;
pub mod list;
pub mod sort;
pub mod update;
