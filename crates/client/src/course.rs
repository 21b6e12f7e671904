use log::debug;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Client, Result};

/// A course in the catalog
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Assigned by the server, never changes
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, deserialize_with = "text")]
    pub title: String,

    #[serde(default, deserialize_with = "text")]
    pub description: String,

    #[serde(rename = "imageLink", default, deserialize_with = "text")]
    pub image_link: String,

    /// The server stores a number, but we only ever display and edit it as text.
    #[serde(default, deserialize_with = "price")]
    pub price: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// Body of an update request. Every field is sent, even if unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseUpdate {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageLink")]
    pub image_link: String,
    pub published: bool,
    pub price: String,
}

impl CourseUpdate {
    /// The course we expect to exist after this update has been applied to `id`
    pub fn applied_to(&self, id: &str) -> Course {
        Course {
            id: id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            image_link: self.image_link.clone(),
            price: self.price.clone(),
            published: None,
        }
    }
}

#[derive(Deserialize)]
struct CourseResp {
    course: Course,
}

#[derive(Deserialize)]
struct CoursesResp {
    courses: Vec<Course>,
}

impl Client {
    /// Get a single course by ID
    pub fn course(&self, course_id: &str) -> Result<Course> {
        self.get::<CourseResp>(&course_path(course_id))
            .map(|r| r.course)
    }

    /// Get every course this admin can see
    pub fn courses(&self) -> Result<Vec<Course>> {
        self.get::<CoursesResp>("admin/courses").map(|r| r.courses)
    }

    /// Replace the given course's fields
    pub fn update_course(&self, course_id: &str, update: &CourseUpdate) -> Result<()> {
        debug!("updating {}: {:?}", course_id, update);
        self.send(
            self.request(Method::PUT, &course_path(course_id))
                .json(update),
        )?;

        Ok(())
    }

    /// Delete the given course, returning the (successful) status the server gave
    pub fn delete_course(&self, course_id: &str) -> Result<StatusCode> {
        let resp = self.send(self.request(Method::DELETE, &course_path(course_id)))?;

        Ok(resp.status())
    }
}

/// Path to a single course resource, relative to the API base
pub fn course_path(course_id: &str) -> String {
    format!("admin/courses/{}", course_id)
}

fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(serde_json::Number),
}

fn price<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Option::<RawPrice>::deserialize(d)? {
        Some(RawPrice::Text(s)) => s,
        Some(RawPrice::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_numeric_price() {
        let c: Course = serde_json::from_value(json!({
            "_id": "abc",
            "title": "Rust",
            "description": "Ferris",
            "imageLink": "https://example.com/crab.png",
            "price": 499,
            "published": false,
        }))
        .unwrap();

        assert_eq!(
            c,
            Course {
                id: "abc".into(),
                title: "Rust".into(),
                description: "Ferris".into(),
                image_link: "https://example.com/crab.png".into(),
                price: "499".into(),
                published: Some(false),
            }
        );
    }

    #[test]
    fn missing_and_null_fields_are_empty() {
        let c: Course = serde_json::from_value(json!({
            "_id": "abc",
            "title": null,
            "price": "12.5",
        }))
        .unwrap();

        assert_eq!(c.title, "");
        assert_eq!(c.description, "");
        assert_eq!(c.image_link, "");
        assert_eq!(c.price, "12.5");
        assert_eq!(c.published, None);
    }

    #[test]
    fn update_body_uses_wire_names() {
        let u = CourseUpdate {
            title: "T".into(),
            description: "D".into(),
            image_link: "I".into(),
            published: true,
            price: "9".into(),
        };

        assert_eq!(
            serde_json::to_value(&u).unwrap(),
            json!({
                "title": "T",
                "description": "D",
                "imageLink": "I",
                "published": true,
                "price": "9",
            })
        );
    }

    #[test]
    fn applied_update_keeps_only_id() {
        let u = CourseUpdate {
            title: "T".into(),
            description: "D".into(),
            image_link: "I".into(),
            published: true,
            price: "9".into(),
        };

        assert_eq!(
            u.applied_to("abc"),
            Course {
                id: "abc".into(),
                title: "T".into(),
                description: "D".into(),
                image_link: "I".into(),
                price: "9".into(),
                published: None,
            }
        );
    }
}
