//! Section renderers for the storefront pages.

mod account;
mod cart;
mod category;
mod common;
mod detail;
mod home;
mod listing;
mod not_found;

pub use account::*;
pub use cart::*;
pub use category::*;
pub use detail::*;
pub use home::*;
pub use listing::*;
pub use not_found::*;
