pub mod cell;
pub mod field;
pub mod loaders;
pub mod record;
pub mod request;

pub use cell::{CellValue, Row};
pub use field::ScheduleField;
pub use loaders::{load_batch_file, load_workbook, save_workbook};
pub use record::{MatchKey, ScheduleRecord};
pub use request::{BulkRequest, BulkResponse, ProcessMode, ACTION_BULK, ACTION_BULK_ADVANCED};
