mod store;

pub use store::StorePage;
