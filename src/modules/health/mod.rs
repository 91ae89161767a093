pub mod cases;

pub use cases::RootEndpoint;
