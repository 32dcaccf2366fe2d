//! Explore-page teacher catalog.

pub mod catalog;

pub use catalog::TeacherCatalog;
