/// State management module
///
/// This module handles all application state, including:
/// - The presentation controller and its navigation rules (controller.rs)
/// - Presentation records written by the controller (data.rs)
/// - The slide document the presentation runs over (deck.rs)
/// - User settings and transition timing (settings.rs)

pub mod controller;
pub mod data;
pub mod deck;
pub mod settings;
