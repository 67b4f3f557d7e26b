//! Reusable view components shared by the pages.

pub mod back_button;
pub mod child_form;
