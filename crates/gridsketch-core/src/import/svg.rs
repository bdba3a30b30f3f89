//! SVG subset importer.
//!
//! Recognized elements: `rect`, `circle`, `ellipse`, `line`, `polyline`,
//! `polygon` and `path` (move/line commands only). Each element converts on
//! its own; a bad element is logged and skipped.

use super::{ImportError, ImportResult};
use crate::shapes::{Circle, Line, Pen, Rectangle, Shape};
use kurbo::Point;
use roxmltree::{Document, Node};
use std::str::FromStr;
use svgtypes::{Length, PathParser, PathSegment, PointsParser};

/// Parse SVG text into shapes, in document order.
///
/// Never fails: an unparseable document yields an empty list.
pub fn import_svg(text: &str) -> Vec<Shape> {
    match parse_svg(text) {
        Ok(shapes) => shapes,
        Err(err) => {
            log::warn!("SVG import failed: {err}");
            Vec::new()
        }
    }
}

/// Parse SVG text into shapes, failing only when the XML itself is invalid.
pub fn parse_svg(text: &str) -> ImportResult<Vec<Shape>> {
    let document = Document::parse(text)?;
    let shapes = document
        .descendants()
        .filter(|node| node.is_element())
        .filter_map(|node| match convert_element(node) {
            Ok(shape) => shape,
            Err(err) => {
                log::debug!("skipping <{}>: {err}", node.tag_name().name());
                None
            }
        })
        .collect();
    Ok(shapes)
}

/// `Ok(None)` for elements outside the supported set (containers, styles...).
fn convert_element(node: Node) -> ImportResult<Option<Shape>> {
    let shape = match node.tag_name().name() {
        "rect" => Shape::Rect(Rectangle::new(
            number(node, "x")?,
            number(node, "y")?,
            number(node, "width")?,
            number(node, "height")?,
        )),
        "circle" => {
            let center = Point::new(number(node, "cx")?, number(node, "cy")?);
            Shape::Circle(Circle::new(center, radius(number(node, "r")?)?))
        }
        "ellipse" => {
            // Approximated as a circle with the mean radius.
            let center = Point::new(number(node, "cx")?, number(node, "cy")?);
            let r = (number(node, "rx")? + number(node, "ry")?) / 2.0;
            Shape::Circle(Circle::new(center, radius(r)?))
        }
        "line" => Shape::Line(Line::new(
            Point::new(number(node, "x1")?, number(node, "y1")?),
            Point::new(number(node, "x2")?, number(node, "y2")?),
        )),
        "polyline" => Shape::Pen(pen("polyline", point_list(node))?),
        "polygon" => Shape::Pen(pen("polygon", point_list(node))?),
        "path" => {
            let points = path_points(node.attribute("d").unwrap_or(""));
            Shape::Pen(pen("path", points)?)
        }
        _ => return Ok(None),
    };
    Ok(Some(shape))
}

/// Coordinate pairs of a `points` attribute.
fn point_list(node: Node) -> Vec<Point> {
    PointsParser::from(node.attribute("points").unwrap_or(""))
        .map(|(x, y)| Point::new(x, y))
        .collect()
}

/// Numeric attribute; missing means 0. Units are dropped.
fn number(node: Node, attribute: &'static str) -> ImportResult<f64> {
    let Some(value) = node.attribute(attribute) else {
        return Ok(0.0);
    };
    Length::from_str(value)
        .map(|length| length.number)
        .map_err(|_| ImportError::InvalidNumber {
            attribute,
            value: value.to_string(),
        })
}

fn radius(r: f64) -> ImportResult<f64> {
    if r < 0.0 {
        return Err(ImportError::NegativeRadius(r));
    }
    Ok(r)
}

fn pen(tag: &'static str, points: Vec<Point>) -> ImportResult<Pen> {
    if points.len() < 2 {
        return Err(ImportError::TooFewPoints {
            tag,
            count: points.len(),
        });
    }
    Ok(Pen::from_points(points))
}

/// Points visited by the move-to and line-to commands of path data.
///
/// Other commands are skipped and leave the current point where it was.
/// Parsing stops at the first syntax error.
fn path_points(data: &str) -> Vec<Point> {
    let mut points = Vec::new();
    let mut current = Point::ZERO;
    for segment in PathParser::from(data) {
        let segment = match segment {
            Ok(segment) => segment,
            Err(err) => {
                log::debug!("path data error: {err}");
                break;
            }
        };
        match segment {
            PathSegment::MoveTo { abs, x, y } | PathSegment::LineTo { abs, x, y } => {
                current = if abs {
                    Point::new(x, y)
                } else {
                    Point::new(current.x + x, current.y + y)
                };
                points.push(current);
            }
            _ => {}
        }
    }
    points
}
