pub mod error_category;
pub mod result_ext;
