mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

/// Turns a loosely typed request payload into the value a route acts on
pub trait ValidateModel {
    type Valid;
    type Error;

    fn validate(self) -> Result<Self::Valid, Self::Error>;
}
