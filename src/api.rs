mod aura;
mod client;
mod telegram;

pub use self::{aura::Api as Aura, telegram::Api as Telegram};
