pub mod logging;

pub use logging::preview_item;
