pub mod acquire;
pub mod dataset;
pub mod storage;
