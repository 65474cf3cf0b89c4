pub mod bitonic;
pub mod quick;
