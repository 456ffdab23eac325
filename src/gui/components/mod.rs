// src/gui/components/mod.rs
pub mod action_bar;
pub mod charts;
pub mod data_table;
pub mod tabs;
