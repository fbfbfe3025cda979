//! Side tables kept alongside the graph: the user registry and the story list.

pub mod story_list;
pub mod user_registry;

pub use story_list::StoryList;
pub use user_registry::UserRegistry;
