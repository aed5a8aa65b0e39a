pub mod entity;
pub mod value_objects;

pub use entity::{Career, CareerUpdate, NewCareer};
pub use value_objects::{CareerId, CareerTitle};

use crate::domain::shared::RecordRepository;

pub type CareerRepository = dyn RecordRepository<Career>;
