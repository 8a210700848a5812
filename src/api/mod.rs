pub use client::*;
pub use resource::*;

mod client;
mod resource;
