pub mod compile;
pub mod locate;
pub mod stage;
