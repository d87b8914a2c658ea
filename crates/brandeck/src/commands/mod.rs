pub mod ai;
pub mod completion;
pub mod config;
pub mod copy;
pub mod image;
pub mod slides;
pub mod version;
