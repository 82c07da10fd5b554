pub mod binder;
pub mod cursor;
pub mod error;
pub mod incremental;
pub mod observer;
pub mod offset;
pub mod offset_config;
