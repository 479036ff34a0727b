//! Illustrations as structured vector-drawing instructions.
//!
//! Tutorials and designs carry an `Illustration` payload; the tutorial player never
//! looks inside it. The frontend can either draw the shapes itself (they are serde
//! ready) or fetch the SVG rendering produced by `Illustration::to_svg`.
//!
//! Coordinates live in a square canvas of `size` units (200 for every built-in asset).

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Canvas size shared by all built-in illustrations.
pub const CANVAS: f32 = 200.0;

/// Fill / stroke attributes. Absent fields are omitted from the rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Paint {
  #[serde(default, skip_serializing_if = "Option::is_none")] pub fill: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")] pub stroke: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")] pub stroke_width: Option<f32>,
  #[serde(default, skip_serializing_if = "Option::is_none")] pub opacity: Option<f32>,
}

impl Paint {
  pub fn fill(color: &str) -> Self {
    Self { fill: Some(color.into()), ..Self::default() }
  }

  /// Outline only (`fill="none"`).
  pub fn outline(color: &str, width: f32) -> Self {
    Self { fill: Some("none".into()), stroke: Some(color.into()), stroke_width: Some(width), opacity: None }
  }

  pub fn with_stroke(mut self, color: &str, width: f32) -> Self {
    self.stroke = Some(color.into());
    self.stroke_width = Some(width);
    self
  }

  pub fn with_opacity(mut self, opacity: f32) -> Self {
    self.opacity = Some(opacity);
    self
  }
}

/// Rotation by `angle` degrees around (`cx`, `cy`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
  pub angle: f32,
  pub cx: f32,
  pub cy: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
  Circle { cx: f32, cy: f32, r: f32, paint: Paint },
  Ellipse {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    /// Degrees, around the ellipse's own center.
    #[serde(default)]
    rotate: f32,
    paint: Paint,
  },
  Line { x1: f32, y1: f32, x2: f32, y2: f32, paint: Paint },
  Polygon { points: Vec<(f32, f32)>, paint: Paint },
  Path { d: String, paint: Paint },
  Group {
    #[serde(default)]
    translate: Option<(f32, f32)>,
    #[serde(default)]
    rotate: Option<Rotation>,
    shapes: Vec<Shape>,
  },
}

/// Two-stop radial gradient usable as `url(#id)` paint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
  pub id: String,
  pub inner: String,
  pub outer: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Illustration {
  #[serde(default = "default_size")]
  pub size: f32,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub gradients: Vec<RadialGradient>,
  pub shapes: Vec<Shape>,
}

fn default_size() -> f32 { CANVAS }

impl Illustration {
  pub fn new(shapes: Vec<Shape>) -> Self {
    Self { size: CANVAS, gradients: Vec::new(), shapes }
  }

  pub fn with_gradient(mut self, g: RadialGradient) -> Self {
    self.gradients.push(g);
    self
  }

  /// Number of drawable primitives, groups flattened.
  pub fn primitive_count(&self) -> usize {
    fn count(shapes: &[Shape]) -> usize {
      shapes
        .iter()
        .map(|s| match s {
          Shape::Group { shapes, .. } => count(shapes),
          _ => 1,
        })
        .sum()
    }
    count(&self.shapes)
  }

  /// Standalone SVG document for display.
  pub fn to_svg(&self) -> String {
    let mut out = String::new();
    let _ = write!(
      out,
      r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {s} {s}">"#,
      s = self.size
    );
    if !self.gradients.is_empty() {
      out.push_str("<defs>");
      for g in &self.gradients {
        let _ = write!(
          out,
          r#"<radialGradient id="{}" cx="50%" cy="50%" r="50%"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></radialGradient>"#,
          escape_xml(&g.id), escape_xml(&g.inner), escape_xml(&g.outer)
        );
      }
      out.push_str("</defs>");
    }
    for shape in &self.shapes {
      write_shape(&mut out, shape);
    }
    out.push_str("</svg>");
    out
  }
}

/// Repeat `shapes` once per angle, each copy rotated around (`cx`, `cy`).
pub fn radial(angles: &[f32], cx: f32, cy: f32, shapes: &[Shape]) -> Vec<Shape> {
  angles
    .iter()
    .map(|&angle| Shape::Group {
      translate: None,
      rotate: Some(Rotation { angle, cx, cy }),
      shapes: shapes.to_vec(),
    })
    .collect()
}

/// `n` angles evenly spaced over a full turn, starting at 0.
pub fn even_angles(n: usize) -> Vec<f32> {
  (0..n).map(|i| i as f32 * 360.0 / n as f32).collect()
}

/// Point at distance `r` from (`cx`, `cy`) along `angle` degrees, rounded to 0.01.
pub fn polar(cx: f32, cy: f32, r: f32, angle: f32) -> (f32, f32) {
  let rad = angle.to_radians();
  (round2(cx + r * rad.cos()), round2(cy + r * rad.sin()))
}

fn round2(v: f32) -> f32 {
  (v * 100.0).round() / 100.0
}

/// Attribute-safe text; paints and path data can come from config.
fn escape_xml(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}

fn write_paint(out: &mut String, p: &Paint) {
  if let Some(fill) = &p.fill { let _ = write!(out, r#" fill="{}""#, escape_xml(fill)); }
  if let Some(stroke) = &p.stroke { let _ = write!(out, r#" stroke="{}""#, escape_xml(stroke)); }
  if let Some(w) = p.stroke_width { let _ = write!(out, r#" stroke-width="{}""#, w); }
  if let Some(o) = p.opacity { let _ = write!(out, r#" opacity="{}""#, o); }
}

fn write_shape(out: &mut String, shape: &Shape) {
  match shape {
    Shape::Circle { cx, cy, r, paint } => {
      let _ = write!(out, r#"<circle cx="{}" cy="{}" r="{}""#, cx, cy, r);
      write_paint(out, paint);
      out.push_str("/>");
    }
    Shape::Ellipse { cx, cy, rx, ry, rotate, paint } => {
      let _ = write!(out, r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}""#, cx, cy, rx, ry);
      if *rotate != 0.0 {
        let _ = write!(out, r#" transform="rotate({} {} {})""#, rotate, cx, cy);
      }
      write_paint(out, paint);
      out.push_str("/>");
    }
    Shape::Line { x1, y1, x2, y2, paint } => {
      let _ = write!(out, r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#, x1, y1, x2, y2);
      write_paint(out, paint);
      out.push_str("/>");
    }
    Shape::Polygon { points, paint } => {
      let pts: Vec<String> = points.iter().map(|(x, y)| format!("{},{}", x, y)).collect();
      let _ = write!(out, r#"<polygon points="{}""#, pts.join(" "));
      write_paint(out, paint);
      out.push_str("/>");
    }
    Shape::Path { d, paint } => {
      let _ = write!(out, r#"<path d="{}""#, escape_xml(d));
      write_paint(out, paint);
      out.push_str("/>");
    }
    Shape::Group { translate, rotate, shapes } => {
      let mut transforms = Vec::new();
      if let Some((x, y)) = translate { transforms.push(format!("translate({}, {})", x, y)); }
      if let Some(r) = rotate { transforms.push(format!("rotate({} {} {})", r.angle, r.cx, r.cy)); }
      if transforms.is_empty() {
        out.push_str("<g>");
      } else {
        let _ = write!(out, r#"<g transform="{}">"#, transforms.join(" "));
      }
      for s in shapes {
        write_shape(out, s);
      }
      out.push_str("</g>");
    }
  }
}
