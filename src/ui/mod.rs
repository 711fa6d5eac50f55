pub mod gallery;
pub mod navigation_manager;
pub mod transition;
pub mod view;
pub mod viewer;
