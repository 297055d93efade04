pub mod creator;

pub use creator::Creator;
