use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A named drawing made of points, owned by an author.
///
/// `(author, name)` is the blueprint's identity. Points keep the order they
/// were added in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub author: String,
    pub name: String,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Blueprint {
    pub fn new(author: impl Into<String>, name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            author: author.into(),
            name: name.into(),
            points,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct NewBlueprint {
    #[validate(custom(function = "not_blank", message = "author cannot be empty"))]
    pub author: String,
    #[validate(custom(function = "not_blank", message = "name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate]
    pub points: Vec<Point>,
}

impl From<NewBlueprint> for Blueprint {
    fn from(value: NewBlueprint) -> Self {
        Self {
            author: value.author,
            name: value.name,
            points: value.points,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(author: &str, name: &str) -> NewBlueprint {
        NewBlueprint {
            author: author.to_owned(),
            name: name.to_owned(),
            points: vec![Point::new(0, 0)],
        }
    }

    #[test]
    fn accepts_non_blank_fields() {
        assert!(request("ana", "house").validate().is_ok());
    }

    #[test]
    fn rejects_blank_author_and_name() {
        let errors = request("", "  ").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("name"));
        assert_eq!(
            fields["author"][0].message.as_deref(),
            Some("author cannot be empty")
        );
    }

    #[test]
    fn missing_points_default_to_empty() {
        let body: NewBlueprint =
            serde_json::from_str(r#"{"author":"ana","name":"house"}"#).unwrap();
        assert!(body.points.is_empty());
        assert!(body.validate().is_ok());
    }

    #[test]
    fn non_numeric_point_is_rejected_on_parse() {
        let parsed = serde_json::from_str::<NewBlueprint>(
            r#"{"author":"ana","name":"house","points":[{"x":"a","y":1}]}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn converts_request_into_blueprint() {
        let blueprint: Blueprint = request("ana", "house").into();
        assert_eq!(blueprint, Blueprint::new("ana", "house", vec![Point::new(0, 0)]));
    }
}
