pub mod column_mapping;
pub mod row_matcher;

pub use column_mapping::{ColumnAliases, ColumnMap};
pub use row_matcher::RowMatcher;
