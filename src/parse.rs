use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::{Circle, Shape, Square};

/// A collection of errors that occur when reconstructing a shape from its serialized line.
#[derive(Error, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ShapeParseError {
    #[error("The text is not of the form `<kind>: <attribute> = <value>`.")]
    Malformed,
    #[error("Unknown shape kind: {0}")]
    UnknownKind(String),
    #[error("Unexpected attribute: expected {expected}, found {found}")]
    UnexpectedAttribute { expected: &'static str, found: String },
    #[error("The attribute value is not a number: {0}")]
    InvalidValue(String),
}

fn split_kind(text: &str) -> Result<(&str, &str), ShapeParseError> {
    let (kind, rest) = text
        .splitn(2, ':')
        .collect_tuple()
        .ok_or(ShapeParseError::Malformed)?;
    Ok((kind.trim(), rest))
}

fn parse_attribute(text: &str, expected: &'static str) -> Result<f64, ShapeParseError> {
    let (name, value) = text
        .splitn(2, '=')
        .collect_tuple()
        .ok_or(ShapeParseError::Malformed)?;

    let name = name.trim();
    if name != expected {
        return Err(ShapeParseError::UnexpectedAttribute {
            expected,
            found: name.to_string(),
        });
    }

    let value = value.trim();
    value
        .parse::<f64>()
        .map_err(|_| ShapeParseError::InvalidValue(value.to_string()))
}

impl FromStr for Circle {
    type Err = ShapeParseError;

    /// Reconstructs a circle from its serialized line.
    /// ```
    /// use erased_shapes::prelude::*;
    /// assert_eq!("Circle: radius = 2".parse::<Circle>(), Ok(Circle::new(2.0)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = split_kind(s)?;
        if kind != "Circle" {
            return Err(ShapeParseError::UnknownKind(kind.to_string()));
        }
        parse_attribute(rest, "radius").map(Circle::new)
    }
}

impl FromStr for Square {
    type Err = ShapeParseError;

    /// ```
    /// use erased_shapes::prelude::*;
    /// assert_eq!("Square: width = 1.5".parse::<Square>(), Ok(Square::new(1.5)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = split_kind(s)?;
        if kind != "Square" {
            return Err(ShapeParseError::UnknownKind(kind.to_string()));
        }
        parse_attribute(rest, "width").map(Square::new)
    }
}

impl FromStr for Shape {
    type Err = ShapeParseError;

    /// Reconstructs an already-wrapped shape, dispatching on the leading kind.
    /// ```
    /// use erased_shapes::prelude::*;
    /// let shape = "Square: width = 1.5".parse::<Shape>().unwrap();
    /// assert_eq!(shape.to_string(), "Square: width = 1.5");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = split_kind(s)?;
        match kind {
            "Circle" => parse_attribute(rest, "radius").map(|radius| Shape::new(Circle::new(radius))),
            "Square" => parse_attribute(rest, "width").map(|width| Shape::new(Square::new(width))),
            _ => Err(ShapeParseError::UnknownKind(kind.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::prelude::*;

    #[rstest]
    #[case("Circle: radius = 2", 2.0)]
    #[case("Circle: radius = -3", -3.0)]
    #[case("  Circle :  radius =  4.2  ", 4.2)]
    fn circle_from_str(#[case] text: &str, #[case] radius: f64) {
        assert_eq!(text.parse::<Circle>(), Ok(Circle::new(radius)));
    }

    #[test]
    fn square_from_str() {
        assert_eq!("Square: width = 1.5".parse::<Square>(), Ok(Square::new(1.5)));
    }

    #[rstest]
    #[case("Triangle: side = 3", ShapeParseError::UnknownKind("Triangle".to_string()))]
    #[case("Circle radius 2", ShapeParseError::Malformed)]
    #[case("Circle: radius", ShapeParseError::Malformed)]
    #[case("Circle: width = 2", ShapeParseError::UnexpectedAttribute { expected: "radius", found: "width".to_string() })]
    #[case("Circle: radius = two", ShapeParseError::InvalidValue("two".to_string()))]
    fn rejects_invalid_lines(#[case] text: &str, #[case] expected: ShapeParseError) {
        assert_eq!(text.parse::<Circle>(), Err(expected));
    }

    #[test]
    fn serialized_line_round_trips() {
        let shapes = vec![
            Shape::new(Circle::new(2.0)),
            Shape::new(Square::new(1.5)),
            Shape::new(Circle::new(-4.2)),
        ];

        for shape in &shapes {
            let mut buf = Vec::new();
            serialize(shape, &mut buf).unwrap();
            let line = String::from_utf8(buf).unwrap();

            let reconstructed = line.trim_end().parse::<Shape>().unwrap();
            let mut buf = Vec::new();
            serialize(&reconstructed, &mut buf).unwrap();
            assert_eq!(String::from_utf8(buf).unwrap(), line);
        }
    }
}
