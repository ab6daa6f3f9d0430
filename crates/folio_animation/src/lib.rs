//! Folio Animation
//!
//! Spring physics used to realise the "scroll to section, animated smoothly"
//! command.
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Scroll Animation**: a spring-driven viewport offset that can be
//!   retargeted mid-flight and clamps to the scrollable range
//! - **Interruptible**: a retarget keeps the current velocity

pub mod scroll;
pub mod spring;

pub use scroll::{ScrollAnimation, ScrollFrame};
pub use spring::{Spring, SpringConfig};
