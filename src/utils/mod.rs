pub mod enums;
pub mod error;
pub mod logger;
pub mod platform;
pub mod report;
pub mod resources;
pub mod text;
pub mod validation;
