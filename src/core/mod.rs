pub mod config;

pub use config::{MapperConfig, V2Version};
