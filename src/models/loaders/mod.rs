pub mod batch_loader;
pub mod workbook_loader;

pub use batch_loader::load_batch_file;
pub use workbook_loader::{load_workbook, save_workbook, WorkbookFormat};
