// src/models.rs
mod count_map;

pub use count_map::CountMap;
