//! Sequence entity.
use super::Entity;
use crate::table::Row;
use serde::{Deserialize, Deserializer, Serialize};

/// A deployed sequence and its mediators, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "sequence")]
pub struct Sequence {
    pub name: String,
    pub container: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub mediators: Vec<String>,
}

/// A single `<mediators>` element arrives as a string, several as a list.
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

impl Entity for Sequence {
    const KIND: &'static str = "sequence";
    const COLLECTION: &'static str = "sequences";
    const QUERY_PARAM: &'static str = "inboundEndpointName";

    fn rows(&self) -> Vec<Row> {
        let mut rows = vec![
            Row::new("NAME", &self.name),
            Row::new("CONTAINER", &self.container),
        ];
        rows.extend(
            self.mediators
                .iter()
                .map(|mediator| Row::new("MEDIATORS", mediator)),
        );
        rows
    }
}
