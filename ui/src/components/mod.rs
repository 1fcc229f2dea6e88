pub mod cover_art;
pub mod search;
pub mod simple;

pub use cover_art::*;
pub use search::*;
pub use simple::*;
