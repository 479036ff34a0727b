//! Built-in content: the lotus tutorial, the gallery designs, and the generator samples.
//!
//! This is what the studio serves when no TOML config is provided, and what config
//! entries are merged on top of.

use crate::domain::{Design, Difficulty, Step, Tutorial};
use crate::generator::Sample;
use crate::illustration::{even_angles, polar, radial, Illustration, Paint, RadialGradient, Shape};

const CENTER: f32 = 100.0;

/// Suggestions served by the "randomize prompt" action.
pub const PROMPT_SUGGESTIONS: [&str; 6] = [
  "Create a lotus-inspired rangoli with flowing petals",
  "Design a geometric mandala with intricate patterns",
  "Generate a peacock-themed rangoli with vibrant colors",
  "Make a festival diya pattern with warm colors",
  "Create a modern minimalist rangoli design",
  "Design a floral border rangoli for doorway",
];

fn circle(cx: f32, cy: f32, r: f32, paint: Paint) -> Shape {
  Shape::Circle { cx, cy, r, paint }
}

fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32, paint: Paint) -> Shape {
  Shape::Ellipse { cx, cy, rx, ry, rotate: 0.0, paint }
}

fn polygon(points: &[(f32, f32)], paint: Paint) -> Shape {
  Shape::Polygon { points: points.to_vec(), paint }
}

fn path(d: &str, paint: Paint) -> Shape {
  Shape::Path { d: d.into(), paint }
}

// ---------- Lotus tutorial ----------

fn lotus_outline_center() -> Vec<Shape> {
  vec![
    circle(CENTER, CENTER, 10.0, Paint::outline("#000000", 2.0)),
    circle(CENTER, CENTER, 2.0, Paint::fill("#000000")),
  ]
}

fn lotus_filled_center() -> Shape {
  circle(CENTER, CENTER, 10.0, Paint::fill("#F59E0B").with_stroke("#000000", 2.0))
}

fn lotus_petals(colored: bool) -> Vec<Shape> {
  even_angles(8)
    .into_iter()
    .enumerate()
    .map(|(i, angle)| {
      let (cx, cy) = polar(CENTER, CENTER, 35.0, angle);
      let paint = if colored {
        Paint::fill(if i % 2 == 0 { "#EC4899" } else { "#8B5CF6" }).with_stroke("#000000", 1.0)
      } else {
        Paint::outline("#000000", 1.0)
      };
      Shape::Ellipse { cx, cy, rx: 8.0, ry: 20.0, rotate: angle, paint }
    })
    .collect()
}

fn lotus_tutorial() -> Tutorial {
  let guidelines: Vec<Shape> = even_angles(8)
    .into_iter()
    .map(|angle| {
      let (x2, y2) = polar(CENTER, CENTER, 60.0, angle);
      Shape::Line { x1: CENTER, y1: CENTER, x2, y2, paint: Paint { stroke: Some("#CCCCCC".into()), stroke_width: Some(1.0), ..Paint::default() } }
    })
    .collect();

  let dots: Vec<Shape> = even_angles(8)
    .into_iter()
    .map(|angle| {
      let (cx, cy) = polar(CENTER, CENTER, 55.0, angle);
      circle(cx, cy, 3.0, Paint::fill("#10B981"))
    })
    .collect();

  let step = |title: &str, description: &str, tip: &str, shapes: Vec<Shape>| Step {
    title: title.into(),
    description: description.into(),
    tip: tip.into(),
    illustration: Illustration::new(shapes),
  };

  Tutorial {
    id: 1,
    title: "Simple Lotus Design".into(),
    description: "Learn to create a beautiful lotus rangoli step by step".into(),
    difficulty: Difficulty::Beginner,
    duration: "15 min".into(),
    materials: vec!["Colored powder".into(), "White chalk".into(), "Small bowl".into()],
    steps: vec![
      step(
        "Draw the Center Circle",
        "Start by drawing a small circle in the center using white chalk",
        "Keep the circle small and neat - this will be your reference point",
        lotus_outline_center(),
      ),
      step(
        "Add Petal Guidelines",
        "Draw 8 lines radiating from the center, equally spaced",
        "Use light strokes - these are just guidelines",
        [lotus_outline_center(), guidelines].concat(),
      ),
      step(
        "Draw the Petals",
        "Create oval petals along each guideline",
        "Make each petal slightly different for a natural look",
        [lotus_outline_center(), lotus_petals(false)].concat(),
      ),
      step(
        "Add Colors",
        "Fill the petals with vibrant colors like pink, orange, and yellow",
        "Start with lighter colors and add darker shades for depth",
        [vec![lotus_filled_center()], lotus_petals(true)].concat(),
      ),
      step(
        "Final Touches",
        "Add decorative dots and small details around the design",
        "Small details make a big difference in the final appearance",
        [vec![lotus_filled_center()], lotus_petals(true), dots].concat(),
      ),
    ],
  }
}

/// Built-in tutorials. Always non-empty and well formed.
pub fn seed_tutorials() -> Vec<Tutorial> {
  vec![lotus_tutorial()]
}

// ---------- Gallery ----------

fn design(
  id: u32,
  title: &str,
  description: &str,
  difficulty: Difficulty,
  kind: &str,
  pattern: &str,
  colors: &[&str],
  shapes: Vec<Shape>,
) -> Design {
  Design {
    id,
    title: title.into(),
    description: description.into(),
    difficulty,
    kind: kind.into(),
    pattern: pattern.into(),
    colors: colors.iter().map(|c| c.to_string()).collect(),
    illustration: Illustration::new(shapes),
  }
}

/// Built-in gallery designs, in display order.
pub fn seed_designs() -> Vec<Design> {
  let lotus_mandala = [
    vec![
      circle(CENTER, CENTER, 80.0, Paint::outline("#FF6B6B", 2.0)),
      circle(CENTER, CENTER, 60.0, Paint::outline("#4ECDC4", 2.0)),
      circle(CENTER, CENTER, 40.0, Paint::outline("#45B7D1", 2.0)),
      circle(CENTER, CENTER, 20.0, Paint::fill("#96CEB4")),
    ],
    radial(
      &even_angles(8),
      CENTER,
      CENTER,
      &[
        ellipse(100.0, 60.0, 8.0, 20.0, Paint::fill("#FF6B6B")),
        ellipse(100.0, 40.0, 6.0, 15.0, Paint::fill("#4ECDC4")),
      ],
    ),
  ]
  .concat();

  let geometric_star = vec![
    polygon(
      &[(100.0, 20.0), (120.0, 60.0), (160.0, 60.0), (130.0, 90.0), (140.0, 130.0), (100.0, 110.0), (60.0, 130.0), (70.0, 90.0), (40.0, 60.0), (80.0, 60.0)],
      Paint::outline("#000000", 2.0),
    ),
    polygon(
      &[(100.0, 40.0), (115.0, 70.0), (145.0, 70.0), (125.0, 95.0), (132.0, 125.0), (100.0, 110.0), (68.0, 125.0), (75.0, 95.0), (55.0, 70.0), (85.0, 70.0)],
      Paint::outline("#000000", 1.0),
    ),
    circle(CENTER, CENTER, 15.0, Paint::outline("#000000", 2.0)),
  ];

  let peacock_feather = vec![
    path("M100 180 Q80 120 100 20 Q120 120 100 180", Paint::fill("#10B981").with_stroke("#1E3A8A", 2.0)),
    ellipse(100.0, 40.0, 30.0, 20.0, Paint::fill("#1E3A8A")),
    ellipse(100.0, 40.0, 20.0, 15.0, Paint::fill("#F59E0B")),
    ellipse(100.0, 40.0, 10.0, 8.0, Paint::fill("#EF4444")),
    circle(100.0, 40.0, 4.0, Paint::fill("#FFFFFF")),
  ];

  let diya_chain: Vec<Shape> = (0..4)
    .map(|i| Shape::Group {
      translate: Some((50.0 + i as f32 * 25.0, 100.0 + (i % 2) as f32 * 20.0)),
      rotate: None,
      shapes: vec![
        ellipse(0.0, 0.0, 15.0, 8.0, Paint::fill("#F59E0B")),
        ellipse(0.0, -2.0, 12.0, 6.0, Paint::fill("#FB923C")),
        ellipse(0.0, -8.0, 3.0, 6.0, Paint::fill("#EF4444")),
      ],
    })
    .collect();

  let mut kolam_dots: Vec<Shape> = (0..7)
    .flat_map(|row| (0..7).map(move |col| (row, col)))
    .map(|(row, col)| circle(30.0 + col as f32 * 23.0, 30.0 + row as f32 * 23.0, 3.0, Paint::fill("#000000")))
    .collect();
  kolam_dots.push(path(
    "M30 30 Q100 15 170 30 Q185 100 170 170 Q100 185 30 170 Q15 100 30 30",
    Paint::outline("#000000", 2.0),
  ));

  let flower_mandala = [
    vec![circle(CENTER, CENTER, 15.0, Paint::fill("#EC4899"))],
    radial(
      &even_angles(6),
      CENTER,
      CENTER,
      &[
        ellipse(100.0, 70.0, 12.0, 25.0, Paint::fill("#8B5CF6")),
        ellipse(100.0, 55.0, 8.0, 15.0, Paint::fill("#06B6D4")),
        ellipse(100.0, 45.0, 5.0, 10.0, Paint::fill("#10B981")),
      ],
    ),
  ]
  .concat();

  vec![
    design(1, "Lotus Mandala", "Traditional lotus-inspired circular design", Difficulty::Beginner, "colored", "floral",
      &["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4"], lotus_mandala),
    design(2, "Geometric Star", "Modern geometric star pattern", Difficulty::Intermediate, "monochrome", "geometric",
      &["#000000"], geometric_star),
    design(3, "Peacock Feather", "Elegant peacock feather design", Difficulty::Advanced, "colored", "traditional",
      &["#1E3A8A", "#10B981", "#F59E0B", "#EF4444"], peacock_feather),
    design(4, "Diya Chain", "Festival diya (lamp) pattern", Difficulty::Beginner, "colored", "festival",
      &["#F59E0B", "#EF4444", "#FB923C"], diya_chain),
    design(5, "Kolam Dots", "Traditional South Indian dot pattern", Difficulty::Intermediate, "monochrome", "dots",
      &["#000000"], kolam_dots),
    design(6, "Flower Mandala", "Intricate flower-based circular design", Difficulty::Advanced, "colored", "floral",
      &["#EC4899", "#8B5CF6", "#06B6D4", "#10B981"], flower_mandala),
  ]
}

// ---------- Generator samples ----------

/// The two designs the mock generator picks from.
pub fn seed_generated_samples() -> Vec<Sample> {
  let flowing_mandala = Illustration::new(
    [
      vec![
        circle(CENTER, CENTER, 80.0, Paint::fill("url(#grad1)").with_opacity(0.3)),
        circle(CENTER, CENTER, 60.0, Paint::outline("#FF6B6B", 2.0)),
        circle(CENTER, CENTER, 40.0, Paint::outline("#4ECDC4", 2.0)),
      ],
      radial(
        &even_angles(12),
        CENTER,
        CENTER,
        &[
          ellipse(100.0, 50.0, 6.0, 15.0, Paint::fill("#45B7D1")),
          circle(100.0, 40.0, 4.0, Paint::fill("#96CEB4")),
        ],
      ),
    ]
    .concat(),
  )
  .with_gradient(RadialGradient { id: "grad1".into(), inner: "#FF6B6B".into(), outer: "#4ECDC4".into() });

  let gradient_star = Illustration::new(vec![
    polygon(
      &[(100.0, 20.0), (130.0, 70.0), (180.0, 70.0), (140.0, 110.0), (160.0, 160.0), (100.0, 130.0), (40.0, 160.0), (60.0, 110.0), (20.0, 70.0), (70.0, 70.0)],
      Paint::fill("#8B5CF6").with_opacity(0.6),
    ),
    polygon(
      &[(100.0, 40.0), (120.0, 80.0), (160.0, 80.0), (130.0, 110.0), (140.0, 150.0), (100.0, 130.0), (60.0, 150.0), (70.0, 110.0), (40.0, 80.0), (80.0, 80.0)],
      Paint::fill("#EC4899").with_opacity(0.8),
    ),
    circle(CENTER, CENTER, 20.0, Paint::fill("#F59E0B")),
    circle(CENTER, CENTER, 10.0, Paint::fill("#EF4444")),
  ]);

  vec![
    Sample { description: "AI-generated mandala with flowing patterns".into(), illustration: flowing_mandala },
    Sample { description: "Geometric star pattern with gradient colors".into(), illustration: gradient_star },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn lotus_tutorial_has_five_steps() {
    let tutorials = seed_tutorials();
    assert_eq!(tutorials.len(), 1);
    let lotus = &tutorials[0];
    assert_eq!(lotus.steps.len(), 5);
    assert_eq!(lotus.steps[0].title, "Draw the Center Circle");
    assert_eq!(lotus.steps[4].title, "Final Touches");
    assert_eq!(lotus.difficulty, Difficulty::Beginner);
  }

  #[test]
  fn lotus_illustrations_build_up() {
    let lotus = &seed_tutorials()[0];
    let counts: Vec<usize> = lotus.steps.iter().map(|s| s.illustration.primitive_count()).collect();
    assert_eq!(counts, vec![2, 10, 10, 9, 17]);
  }

  #[test]
  fn design_ids_are_unique() {
    let designs = seed_designs();
    assert_eq!(designs.len(), 6);
    let ids: HashSet<u32> = designs.iter().map(|d| d.id).collect();
    assert_eq!(ids.len(), designs.len());
  }

  #[test]
  fn kolam_grid_is_seven_by_seven_plus_border() {
    let kolam = seed_designs().into_iter().find(|d| d.title == "Kolam Dots").unwrap();
    assert_eq!(kolam.illustration.primitive_count(), 50);
  }

  #[test]
  fn two_generator_samples() {
    let samples = seed_generated_samples();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].illustration.gradients.len(), 1);
  }
}
