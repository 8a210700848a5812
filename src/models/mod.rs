pub use about::*;
pub use certificate::*;
pub use feedback::*;
pub use hero::*;
pub use list_ops::*;
pub use project::*;
pub use skill::*;
pub use tech_stack::*;
pub use user::*;

mod about;
mod certificate;
mod feedback;
mod hero;
mod list_ops;
mod project;
mod skill;
mod tech_stack;
mod user;
