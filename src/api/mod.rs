//! Внешний API движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) – всё, что присылает клиент;
//! - события (events.rs) – всё, что рассылает сервер;
//! - ошибки (errors.rs) – то, что видит клиент;
//! - `GameManager::handle` (handler.rs) – диспетчер команд.

pub mod commands;
pub mod errors;
pub mod events;
pub mod handler;

pub use commands::*;
pub use errors::*;
pub use events::*;
