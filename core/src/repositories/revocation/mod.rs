pub mod memory;
pub mod traits;

pub use memory::InMemoryRevocationStore;
pub use traits::RevocationStore;
