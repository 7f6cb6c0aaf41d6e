mod user;
pub use user::*;

mod new;
pub use new::*;

mod id;
pub use id::*;
