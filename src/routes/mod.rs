pub mod data;
pub mod fallback;
