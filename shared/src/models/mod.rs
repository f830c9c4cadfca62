//! Domain models for the Tea Factory Management Platform

mod inventory;
mod message;
mod supply;
mod user;

pub use inventory::*;
pub use message::*;
pub use supply::*;
pub use user::*;
