//! Portfolio - Bulls and Cows engine and terminal front end
//!
//! The `bulls_cows` module is the game engine; everything else is the
//! terminal presentation around it.

pub mod app;
pub mod build_info;
pub mod bulls_cows;
pub mod constants;
pub mod feeds;
pub mod input;
pub mod logging;
pub mod ui;
