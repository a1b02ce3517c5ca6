pub mod components;
pub mod keymap;
pub mod screens;
pub mod ui;
