pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemoryKeyValueStore;
pub use r#trait::KeyValueStore;

#[cfg(test)]
mod tests;
