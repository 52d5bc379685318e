//! Property test suite entry point.

mod selection_model;
