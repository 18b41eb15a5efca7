pub mod constraint;
pub mod model;
