pub mod decoder;
pub(crate) mod extractor;
pub mod reducer;
