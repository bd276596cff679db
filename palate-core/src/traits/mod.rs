//! Collaborator contracts the core integrates against.

mod completion;
mod stores;

pub use completion::CompletionClient;
pub use stores::{LearningStore, ProfileStore};
