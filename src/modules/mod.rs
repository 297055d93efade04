pub mod brand;
pub mod campaign;
pub mod creator;
pub mod discovery;
