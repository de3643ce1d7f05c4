pub mod application;

pub use application::{ApplicationForm, ApplicationRecord, ContactLink, RecordIdGenerator};
