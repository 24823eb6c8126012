// Table and bridge generators used inside typeflags itself.

pub mod peano;
pub mod storage_table;
pub mod tag_stream;
