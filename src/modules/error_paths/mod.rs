pub mod cases;

pub use cases::ErrorPaths;
