/// User interface module
///
/// - Intro screen, slide stage and control bar (screens.rs)
/// - Canvas-drawn indicator dots (dots.rs)

pub mod dots;
pub mod screens;
