mod greeting;
mod health;

pub use greeting::greeting;
pub use health::health;
