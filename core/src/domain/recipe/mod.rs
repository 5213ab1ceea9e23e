pub mod entities;
pub mod ports;
pub mod schema;
pub mod services;
pub mod templates;
pub mod value_objects;
