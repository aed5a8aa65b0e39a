// src/infrastructure/storage/mod.rs
pub mod cloudinary;

pub use cloudinary::{CloudinaryCredentials, CloudinaryUploader};
