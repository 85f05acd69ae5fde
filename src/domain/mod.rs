pub mod product;
pub mod qiri;
pub mod sync;
