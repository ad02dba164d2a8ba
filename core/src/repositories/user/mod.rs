pub mod memory;
pub mod traits;

pub use memory::InMemoryUserRepository;
pub use traits::UserRepository;
