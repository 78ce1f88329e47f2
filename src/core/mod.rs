pub mod audio;
pub mod config;
pub mod dialogue;
pub mod model;
pub mod plugin;
