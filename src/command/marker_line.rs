use egui::{Color32, Pos2};

use super::DisplayCommand;
use crate::surface::Surface;

/// A freehand stroke: every point the pointer visited while the button was held
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerLine {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl MarkerLine {
    /// Start a line at `start`. Thickness and color are fixed from here on.
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl DisplayCommand for MarkerLine {
    fn drag(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    fn display(&self, surface: &mut Surface<'_>) {
        if self.points.len() < 2 {
            return;
        }
        surface.polyline(&self.points, self.thickness, self.color);
    }
}
