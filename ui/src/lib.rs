//! This crate contains all shared UI for the workspace.

mod sidebar;
pub use sidebar::{Sidebar, SidebarLink, SIDEBAR_ACTIVE_CLASS, SIDEBAR_LINK_CLASS};

mod layout;
pub use layout::AppShell;

mod auth;
pub use auth::*;

pub mod hooks;
pub mod storage;

mod components;
pub use components::*;
