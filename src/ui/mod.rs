/// User interface module
///
/// - Card display model (render.rs)
/// - Viewport breakpoints and resize debouncing (viewport.rs)
/// - Session controller driving filter, sort and render (controller.rs)
/// - iced widget composition (cards.rs)

pub mod cards;
pub mod controller;
pub mod render;
pub mod viewport;
