//! A self-contained 2D structure depiction
//!
//! `Depiction` is the stock grid item: a set of points (optionally carrying a
//! text symbol) joined by connections of order one or more. It serializes as
//! a flat list of points so it can cross the JS boundary unchanged.

use super::depictable::Depictable;
use super::fragment::Fragment;
use super::geometry::{Plane, Point};
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::renderers::svg::{escape, svg_number};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Distance between the parallel strokes of a multi-order connection
const CONNECTION_SPACING: f64 = 0.15;

/// A point as it appears in serialized form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PointSpec {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// A connection between two points
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    /// Number of parallel strokes
    #[serde(default = "single_order")]
    pub order: u8,
}

fn single_order() -> u8 {
    1
}

fn new_uid() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[derive(Serialize, Deserialize)]
struct DepictionRepr {
    #[serde(default = "new_uid")]
    id: String,
    #[serde(default)]
    points: Vec<PointSpec>,
    #[serde(default)]
    connections: Vec<Connection>,
}

/// Points and connections laid out in a y-up plane
#[derive(Clone, Debug, PartialEq)]
pub struct Depiction {
    id: String,
    plane: Plane,
    symbols: BTreeMap<usize, String>,
    connections: Vec<Connection>,
}

impl Depiction {
    /// Create an empty depiction with a random id
    pub fn new() -> Self {
        Self::with_id(new_uid())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            plane: Plane::new(),
            symbols: BTreeMap::new(),
            connections: Vec::new(),
        }
    }

    /// Add (or move) an unlabelled point
    pub fn with_point(mut self, id: usize, x: f64, y: f64) -> Self {
        self.plane.insert(id, Point::new(x, y));
        self.symbols.remove(&id);
        self
    }

    /// Add (or move) a point drawn as a text symbol
    pub fn with_symbol(mut self, id: usize, x: f64, y: f64, symbol: impl Into<String>) -> Self {
        self.plane.insert(id, Point::new(x, y));
        self.symbols.insert(id, symbol.into());
        self
    }

    pub fn with_connection(self, from: usize, to: usize) -> Self {
        self.with_bond(from, to, 1)
    }

    /// Add a connection drawn with `order` parallel strokes
    pub fn with_bond(mut self, from: usize, to: usize, order: u8) -> Self {
        self.connections.push(Connection {
            from,
            to,
            order: order.max(1),
        });
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn symbol(&self, id: usize) -> Option<&str> {
        self.symbols.get(&id).map(String::as_str)
    }

    fn point(&self, id: usize) -> Result<Point, RenderError> {
        self.plane.get(&id).copied().ok_or(RenderError::MissingPoint(id))
    }

    fn connection_lines(&self, connection: &Connection) -> Result<Vec<String>, RenderError> {
        let a = self.point(connection.from)?;
        let b = self.point(connection.to)?;

        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let length = dx.hypot(dy);
        let strokes = if length > 0.0 { connection.order.max(1) } else { 1 };

        // Unit normal to the connection; offsets fan out symmetrically around it
        let (nx, ny) = if length > 0.0 { (-dy / length, dx / length) } else { (0.0, 0.0) };
        let middle = f64::from(strokes - 1) / 2.0;

        Ok((0..strokes)
            .map(|i| {
                let offset = (f64::from(i) - middle) * CONNECTION_SPACING;
                let (ox, oy) = (nx * offset, ny * offset);
                format!(
                    "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
                    svg_number(a.x + ox),
                    svg_number(-(a.y + oy)),
                    svg_number(b.x + ox),
                    svg_number(-(b.y + oy)),
                )
            })
            .collect())
    }
}

impl Default for Depiction {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Depiction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let points = self
            .plane
            .iter()
            .map(|(&id, p)| PointSpec {
                id,
                x: p.x,
                y: p.y,
                symbol: self.symbols.get(&id).cloned(),
            })
            .collect();

        DepictionRepr {
            id: self.id.clone(),
            points,
            connections: self.connections.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Depiction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = DepictionRepr::deserialize(deserializer)?;
        let mut depiction = Depiction::with_id(repr.id);
        for spec in repr.points {
            depiction.plane.insert(spec.id, Point::new(spec.x, spec.y));
            if let Some(symbol) = spec.symbol {
                depiction.symbols.insert(spec.id, symbol);
            }
        }
        depiction.connections = repr.connections;
        Ok(depiction)
    }
}

impl Depictable for Depiction {
    fn plane(&self) -> &Plane {
        &self.plane
    }

    fn plane_mut(&mut self) -> &mut Plane {
        &mut self.plane
    }

    fn render(&self, config: &RenderConfig) -> Result<Fragment, RenderError> {
        if self.plane.is_empty() {
            return Err(RenderError::EmptyPlane);
        }

        // Fresh suffix per render so clones in one canvas never share mask ids
        let mut fragment = Fragment::new(format!("{}-{}", self.id, new_uid()));

        for connection in &self.connections {
            fragment.connections.extend(self.connection_lines(connection)?);
        }

        for (&id, symbol) in &self.symbols {
            let p = self.point(id)?;
            let (x, y) = (svg_number(p.x), svg_number(-p.y));

            fragment.points.push(format!(
                "    <text x=\"{x}\" y=\"{y}\" fill=\"{}\" font-family=\"{}\" font-size=\"{}\" \
                 text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
                escape(&config.symbol_color),
                escape(&config.symbol_font_family),
                svg_number(config.font_size),
                escape(symbol),
            ));
            fragment.masks.push(format!(
                "      <circle cx=\"{x}\" cy=\"{y}\" r=\"{}\" fill=\"black\"/>",
                svg_number(config.mask_radius),
            ));
        }

        Ok(fragment)
    }
}
