// Theme module - Color constants and theme re-exports
//
// This module provides the color palette and the color helpers used by the
// octopus graph, resource cards and status bar.

pub mod default;

use ratatui::style::Color;

/// Primary accent color - used for borders, titles, connector arms
/// RGB: (187, 154, 247)
pub const NEON_PURPLE: Color = Color::Rgb(187, 154, 247);

/// Warning indicator - used for degraded success rates
/// RGB: (255, 158, 100)
pub const PUMPKIN_ORANGE: Color = Color::Rgb(255, 158, 100);

/// Danger indicator - used for poor success rates and load errors
/// RGB: (247, 118, 142)
pub const BLOOD_RED: Color = Color::Rgb(247, 118, 142);

/// Healthy indicator - used for good success rates and the selected link
/// RGB: (158, 206, 106)
pub const TOXIC_GREEN: Color = Color::Rgb(158, 206, 106);

/// Neutral text - used for labels and resources without traffic
/// RGB: (169, 177, 214)
pub const BONE_WHITE: Color = Color::Rgb(169, 177, 214);

/// Dimmed border for summary panels
/// RGB: (86, 95, 137)
pub const GRAVE_GRAY: Color = Color::Rgb(86, 95, 137);

pub use default::*;
