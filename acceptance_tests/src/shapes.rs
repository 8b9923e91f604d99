#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use erased_shapes::prelude::*;

    // The full driver scenario: build a mixed sequence, one shape with an
    // injected draw behavior, then run the draw pass and the serialize pass.
    #[test]
    fn driver_transcript() {
        let shapes = vec![
            Shape::new(Circle::new(2.0)),
            Shape::new(Square::new(1.5)),
            Shape::with_strategy(Circle::new(4.2), |circle: &Circle, out: &mut dyn io::Write| {
                writeln!(out, "ASCII Circle: ( radius = {} )", circle.radius())
            }),
        ];

        let mut out = Vec::new();
        writeln!(out, "Drawing all shapes:").unwrap();
        draw_all(&shapes, &mut out).unwrap();
        writeln!(out).unwrap();
        writeln!(out, "Serializing all shapes:").unwrap();
        serialize_all(&shapes, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Drawing all shapes:\n\
             Drawing Circle: radius = 2\n\
             Drawing Square: width = 1.5\n\
             ASCII Circle: ( radius = 4.2 )\n\
             \n\
             Serializing all shapes:\n\
             Circle: radius = 2\n\
             Square: width = 1.5\n\
             Circle: radius = 4.2\n",
        );
    }

    // Wrapping, cloning, moving, and reconstruction must all preserve the
    // observable output of every shape in the sequence.
    #[test]
    fn output_survives_value_operations() {
        let shapes = vec![
            Shape::new(Circle::new(-4.2)),
            Shape::new(Square::new(0.0)),
        ];

        let mut expected = Vec::new();
        serialize_all(&shapes, &mut expected).unwrap();
        let expected = String::from_utf8(expected).unwrap();

        // Clone, then drop the originals.
        let copied = shapes.clone();
        drop(shapes);
        let mut buf = Vec::new();
        serialize_all(&copied, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);

        // Move.
        let moved = copied;
        let mut buf = Vec::new();
        serialize_all(&moved, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);

        // Serialize, reconstruct, serialize again.
        let reconstructed = expected
            .lines()
            .map(|line| line.parse::<Shape>().unwrap())
            .collect::<Vec<_>>();
        let mut buf = Vec::new();
        serialize_all(&reconstructed, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}
