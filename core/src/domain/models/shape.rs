//! # Shape Models
//!
//! One capability, many variants. Adding a shape means adding a type, not
//! editing the ones already here.

/// Two-decimal pi. Kept short so printed areas stay tidy.
pub const APPROX_PI: f64 = 3.14;

/// Anything with a measurable surface.
pub trait Shape {
    fn label(&self) -> &'static str;

    /// Dimension name/value pairs, in display order.
    fn dimensions(&self) -> Vec<(&'static str, f64)>;

    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn label(&self) -> &'static str {
        "Rectangle"
    }

    fn dimensions(&self) -> Vec<(&'static str, f64)> {
        vec![("width", self.width), ("height", self.height)]
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn label(&self) -> &'static str {
        "Circle"
    }

    fn dimensions(&self) -> Vec<(&'static str, f64)> {
        vec![("radius", self.radius)]
    }

    fn area(&self) -> f64 {
        APPROX_PI * self.radius * self.radius
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_area_is_width_times_height() {
        let rect = Rectangle::new(5.0, 10.0);
        assert_eq!(rect.area(), 50.0);
    }

    #[test]
    fn circle_area_uses_the_short_pi() {
        let circle = Circle::new(7.0);
        assert!((circle.area() - 153.86).abs() < 1e-9);
    }

    #[test]
    fn variants_answer_through_one_seam() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Rectangle::new(5.0, 10.0)),
            Box::new(Circle::new(7.0)),
        ];

        let labels: Vec<&str> = shapes.iter().map(|shape| shape.label()).collect();
        assert_eq!(labels, ["Rectangle", "Circle"]);
        assert!(shapes.iter().all(|shape| shape.area() > 0.0));
    }

    #[test]
    fn dimensions_come_back_in_display_order() {
        let rect = Rectangle::new(2.0, 3.0);
        assert_eq!(rect.dimensions(), [("width", 2.0), ("height", 3.0)]);

        let circle = Circle::new(1.0);
        assert_eq!(circle.dimensions(), [("radius", 1.0)]);
    }
}
