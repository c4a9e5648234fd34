pub mod bot;
pub mod index;

pub use bot::{Bot, BotLevel};
pub use index::{canonical, is_anagram, WordIndex};
