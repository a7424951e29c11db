//! Elevator Dispatch Library
//!
//! Models the dispatch logic of a multi-elevator building. Can be driven
//! from tests, the headless binary, or a hardware interface layer.

pub mod simulation;
