//! # Skrolla Core
//!
//! Core component of **Skrolla** that is shared between all other components. It describes UI
//! element trees in the host's normalized coordinate space and contains the scrollbar
//! [`thumb`] geometry calculation.

#![deny(rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub mod de;
pub mod thumb;

/// A point in the host's normalized coordinate space. Both axes run from `0` to `1`, with the
/// origin in the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y] = components(s)?;
        Ok(Self { x, y })
    }
}

/// An axis-aligned rectangle described by two anchor points, as the host positions all of its
/// UI elements. The anchors are fractions of the parent element's extent, not absolute units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchors {
    /// Bottom-left corner.
    #[serde(with = "de::point_string")]
    pub min: Point,
    /// Top-right corner.
    #[serde(with = "de::point_string")]
    pub max: Point,
}

impl Anchors {
    #[must_use]
    pub fn new(min: impl Into<Point>, max: impl Into<Point>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// A color with straight alpha, each channel a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b, a] = components(s)?;
        Ok(Self { r, g, b, a })
    }
}

/// Any error that can happen when parsing a [`Point`] or [`Rgba`] from the host's
/// space-separated string form.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input had the wrong number of components.
    #[error("expected {expected} space-separated components, got {got}")]
    ComponentCount { expected: usize, got: usize },
    /// A single component was not a valid number.
    #[error("component is not a valid number")]
    InvalidComponent(#[from] std::num::ParseFloatError),
}

fn components<const N: usize>(s: &str) -> Result<[f32; N], ParseError> {
    let mut out = [0.0; N];
    let mut parts = s.split_ascii_whitespace();

    for (i, slot) in out.iter_mut().enumerate() {
        *slot = parts
            .next()
            .ok_or(ParseError::ComponentCount {
                expected: N,
                got: i,
            })?
            .parse()?;
    }

    let rest = parts.count();
    if rest > 0 {
        return Err(ParseError::ComponentCount {
            expected: N,
            got: N + rest,
        });
    }

    Ok(out)
}

/// Text alignment within a label's rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Axis a scroll view moves its content along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Vertical,
    Horizontal,
}

/// The visible payload of a single UI element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Part {
    /// A filled rectangle, optionally capturing the cursor while shown.
    Panel {
        #[serde(with = "de::rgba_string")]
        color: Rgba,
        #[serde(default, skip_serializing_if = "is_false")]
        cursor_enabled: bool,
    },
    /// A piece of text.
    Label {
        text: String,
        font_size: u16,
        align: Align,
    },
    /// A filled rectangle whose children are moved along the scroll axis by the host. Scrolling
    /// behavior itself belongs to the host; this is only the declarative description.
    ScrollView {
        #[serde(with = "de::rgba_string")]
        color: Rgba,
        direction: ScrollDirection,
        speed: f32,
        fade: f32,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// A single UI element: a [`Part`] positioned by [`Anchors`] relative to its parent, with any
/// number of child elements anchored inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub anchors: Anchors,
    #[serde(flatten)]
    pub part: Part,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(part: Part, anchors: Anchors) -> Self {
        Self {
            anchors,
            part,
            children: Vec::new(),
        }
    }

    /// Append a child element, consuming and returning `self` for chained construction.
    #[must_use]
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(element);
        self
    }
}

/// An ordered forest of [`Element`]s, the unit in which element descriptions travel to a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    pub elements: Vec<Element>,
}

impl Tree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
