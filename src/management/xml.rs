//! XML response bodies to entity values.
//!
//! The body is read event by event into a `serde_json::Value` tree, then
//! deserialized into the entity type. Leaf text is kept exactly as sent,
//! whitespace included; whitespace between elements is dropped. Child
//! elements with the same name collect into an array wherever they appear,
//! so unrelated elements may sit between repeated ones.
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("document has no root element")]
    MissingRoot,
    #[error("document ends inside <{0}>")]
    UnexpectedEof(String),
    #[error("unexpected content after the root element")]
    TrailingContent,
    #[error("unexpected document shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Decode an XML body into an entity. No partial value is returned on error.
pub fn decode<E: DeserializeOwned>(body: &[u8]) -> Result<E, DecodeError> {
    let value = document_value(body)?;
    Ok(serde_json::from_value(value)?)
}

fn document_value(body: &[u8]) -> Result<Value, DecodeError> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if root.is_some() {
                    return Err(DecodeError::TrailingContent);
                }
                let tag = tag_name(e.name().as_ref());
                root = Some(element_value(&mut reader, &tag)?);
            }
            Event::Empty(_) => {
                if root.is_some() {
                    return Err(DecodeError::TrailingContent);
                }
                root = Some(Value::Object(Map::new()));
            }
            Event::Text(e) if !is_blank(&e) => {
                return Err(match root {
                    Some(_) => DecodeError::TrailingContent,
                    None => DecodeError::MissingRoot,
                });
            }
            Event::CData(_) => {
                return Err(match root {
                    Some(_) => DecodeError::TrailingContent,
                    None => DecodeError::MissingRoot,
                });
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    root.ok_or(DecodeError::MissingRoot)
}

/// Read up to the end tag of `tag`. Leaves become strings, anything with
/// child elements becomes an object.
fn element_value<R: BufRead>(reader: &mut Reader<R>, tag: &str) -> Result<Value, DecodeError> {
    let mut children = Map::new();
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = tag_name(e.name().as_ref());
                let child = element_value(reader, &name)?;
                insert_child(&mut children, name, child);
            }
            Event::Empty(e) => {
                insert_child(
                    &mut children,
                    tag_name(e.name().as_ref()),
                    Value::String(String::new()),
                );
            }
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&e.decode().map_err(quick_xml::Error::from)?),
            Event::End(_) => break,
            Event::Eof => return Err(DecodeError::UnexpectedEof(tag.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if children.is_empty() {
        Ok(Value::String(text))
    } else {
        Ok(Value::Object(children))
    }
}

fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn is_blank(text: &[u8]) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::{document_value, DecodeError};
    use serde_json::json;

    #[test]
    fn leaf_text_keeps_surrounding_whitespace() {
        let value = document_value(b"<s>\n  <a>  x </a>\n  <b>\ty</b>\n</s>").expect("parse");
        assert_eq!(value, json!({"a": "  x ", "b": "\ty"}));
    }

    #[test]
    fn repeated_children_collect_even_when_interleaved() {
        let value = document_value(b"<s><m>1</m><other>o</other><m>2</m><m>3</m></s>")
            .expect("parse");
        assert_eq!(value, json!({"m": ["1", "2", "3"], "other": "o"}));
    }

    #[test]
    fn entities_and_cdata_are_decoded() {
        let value =
            document_value(b"<s><a>a &amp; b</a><b><![CDATA[<raw> ]]></b><c/></s>").expect("parse");
        assert_eq!(value, json!({"a": "a & b", "b": "<raw> ", "c": ""}));
    }

    #[test]
    fn structural_errors_are_reported() {
        assert!(matches!(
            document_value(b"   "),
            Err(DecodeError::MissingRoot)
        ));
        assert!(matches!(
            document_value(b"<s><a>x</a>"),
            Err(DecodeError::UnexpectedEof(tag)) if tag == "s"
        ));
        assert!(matches!(
            document_value(b"<s/><t/>"),
            Err(DecodeError::TrailingContent)
        ));
        assert!(matches!(
            document_value(b"<s><a>x</b></s>"),
            Err(DecodeError::Xml(_))
        ));
    }
}
