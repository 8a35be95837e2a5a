pub mod app_layout;
pub mod icon;
pub mod masthead;
pub mod pagination;
pub mod sidebar;
