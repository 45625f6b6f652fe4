//! View-state machines and helpers shared by the components. Nothing here renders;
//! `timing` is the only module that touches a platform runtime.

pub mod format;
pub mod panel;
pub mod score;
pub mod timing;
pub mod upload;
