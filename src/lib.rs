pub mod action;
pub mod action_handler;
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod state;
pub mod storage;
pub mod ui;
