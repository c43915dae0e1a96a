pub mod grid;
pub mod popups;
pub mod sidebar;
pub mod toolbar;
