pub mod error_page;
pub mod footer;
pub mod header;
pub mod loading;
pub mod render;
pub mod results;
