// src/fetch/mod.rs

pub mod page;
pub mod urls;

pub use page::get_html;
pub use urls::{parse_base_url, schedule_url, DEFAULT_BASE_URL};
