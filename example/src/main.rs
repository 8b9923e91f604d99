use std::io;
use std::io::Write;

use erased_shapes::prelude::*;

// Draws and serializes a mixed sequence of shapes through the value-semantic
// `Shape` wrapper. The last shape carries an injected draw behavior.
fn main() -> io::Result<()> {
    let shapes = vec![
        Shape::new(Circle::new(2.0)),
        Shape::new(Square::new(1.5)),
        Shape::with_strategy(Circle::new(4.2), |circle: &Circle, out: &mut dyn io::Write| {
            writeln!(out, "ASCII Circle: ( radius = {} )", circle.radius())
        }),
    ];

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Drawing all shapes:")?;
    draw_all(&shapes, &mut out)?;

    writeln!(out)?;
    writeln!(out, "Serializing all shapes:")?;
    serialize_all(&shapes, &mut out)?;

    Ok(())
}
