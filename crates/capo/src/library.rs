//! Built-in chord shape library.
//!
//! A small table of standard open-position shapes (plus the F barre), keyed
//! by chord name. The table is initialized once and read-only afterwards, so
//! concurrent lookups need no coordination.

use std::collections::HashMap;
use std::sync::OnceLock;

use capo_core::diagram::{Barre, ChordDiagram};

static SHAPES: OnceLock<HashMap<&'static str, ChordDiagram>> = OnceLock::new();

fn shapes() -> &'static HashMap<&'static str, ChordDiagram> {
    SHAPES.get_or_init(|| {
        let open = |name: &'static str, positions: [i32; 6]| {
            (
                name,
                ChordDiagram::new(name, positions.to_vec())
                    .expect("built-in shapes have 6 positions"),
            )
        };

        let mut table = HashMap::from([
            open("C", [-1, 3, 2, 0, 1, 0]),
            open("A", [-1, 0, 2, 2, 2, 0]),
            open("G", [3, 2, 0, 0, 0, 3]),
            open("E", [0, 2, 2, 1, 0, 0]),
            open("D", [-1, -1, 0, 2, 3, 2]),
            open("Am", [-1, 0, 2, 2, 1, 0]),
            open("Em", [0, 2, 2, 0, 0, 0]),
            open("Dm", [-1, -1, 0, 2, 3, 1]),
        ]);

        table.insert(
            "F",
            ChordDiagram::new("F", vec![1, 3, 3, 2, 1, 1])
                .expect("built-in shapes have 6 positions")
                .with_barres(vec![Barre::new(1, 6, 1)]),
        );

        table
    })
}

/// Looks up a built-in shape by chord name.
///
/// # Examples
///
/// ```
/// # use capo::library::shape;
/// assert!(shape("Am").is_some());
/// assert!(shape("B13#11").is_none());
/// ```
pub fn shape(name: &str) -> Option<&'static ChordDiagram> {
    shapes().get(name)
}

/// Returns all built-in shape names, sorted.
pub fn shape_names() -> Vec<&'static str> {
    let mut names: Vec<_> = shapes().keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shape() {
        let c = shape("C").unwrap();
        assert_eq!(c.positions(), &[-1, 3, 2, 0, 1, 0]);
        assert_eq!(c.name(), "C");
    }

    #[test]
    fn test_f_shape_carries_full_barre() {
        let f = shape("F").unwrap();
        assert_eq!(f.barres(), &[Barre::new(1, 6, 1)]);
    }

    #[test]
    fn test_unknown_shape() {
        assert!(shape("Z").is_none());
    }

    #[test]
    fn test_shape_names_sorted() {
        let names = shape_names();
        assert_eq!(names.len(), 9);
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"Em"));
    }
}
