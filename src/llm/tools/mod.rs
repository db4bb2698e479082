//! Agent预置工具集

pub mod time;
pub mod web_search;
