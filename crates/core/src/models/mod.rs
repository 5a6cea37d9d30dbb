pub mod calendar;
pub mod grid;
pub mod mutation;
pub mod slot;
pub mod viewer;
pub mod wire;
