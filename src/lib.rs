pub mod app;
pub mod assets;
pub mod button;
pub mod config;
pub mod event;
pub mod fleet;
pub mod game;
pub mod geometry;
pub mod input;
pub mod scoreboard;
pub mod settings;
pub mod sprites;
pub mod stats;
pub mod ui;
