//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it applies the session guard,
//! fetches through the typed endpoint wrappers, and delegates shared
//! rendering details to `components`.

pub mod child_create;
pub mod child_edit;
pub mod children_list;
pub mod group_create;
pub mod group_edit;
pub mod groups_list;
pub mod home;
pub mod login;
