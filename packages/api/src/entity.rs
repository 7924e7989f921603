pub mod brand;
pub mod form_definition;
pub mod lead;
pub mod region;
pub mod website;
