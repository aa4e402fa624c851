//! Server module for assembling and running the application

pub mod builder;

pub use builder::AppBuilder;
