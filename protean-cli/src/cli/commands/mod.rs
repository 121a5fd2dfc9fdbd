pub mod analyze;
pub mod compare;
pub mod functions;
pub mod validate;
