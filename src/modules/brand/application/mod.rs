pub mod service;

pub use service::{BrandSelection, BrandService};
