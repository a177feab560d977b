// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::Args;
pub use crate::core::plot::{MAX_PLOT_CATEGORIES, PlotError, render_bar_chart};
pub use crate::core::scanner::pattern::Pattern;
pub use crate::core::scanner::traverse_directories;
pub use crate::models::CountMap;
