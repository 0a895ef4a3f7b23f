// Portfolio library - exposes all core modules for testing

pub mod app;
pub mod config;
pub mod config_io;
pub mod content;
pub mod fx;
pub mod journey;
pub mod services;
pub mod shell;
pub mod view;
