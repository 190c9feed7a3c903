pub mod commands;
pub mod viewer;

pub use commands::Command;
pub use viewer::PostViewer;
