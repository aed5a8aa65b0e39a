// src/application/commands/careers/mod.rs
mod create;
mod delete;
mod form;
mod service;
mod update;

pub use create::CreateCareerCommand;
pub use delete::DeleteCareerCommand;
pub use form::{CareerFields, ValidCareer};
pub use service::CareerCommandService;
pub use update::UpdateCareerCommand;
