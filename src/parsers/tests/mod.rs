mod extraction_tests;
pub(crate) mod fixtures;
