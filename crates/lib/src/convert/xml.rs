//! Ordered-value to XML conversion.
//!
//! Renders the plain nested representation of an Options node as an XML
//! document rooted at `<data>`. Map keys become element names; sequence
//! items take the singularised form of the parent tag (`users` → `user`),
//! falling back to `item` at the root. Text content is escaped by the
//! writer.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::Value;

/// Converts a plain nested value to an XML string.
///
/// ```
/// # use optkit::convert::to_xml;
/// # use serde_json::json;
/// let xml = to_xml(&json!({"users": ["ann", "bob"]})).unwrap();
/// assert!(xml.contains("<users><user>ann</user><user>bob</user></users>"));
/// ```
pub fn to_xml(value: &Value) -> crate::Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    writer.write_event(Event::Start(BytesStart::new("data")))?;
    write_children(&mut writer, value, None)?;
    writer.write_event(Event::End(BytesEnd::new("data")))?;

    String::from_utf8(writer.into_inner())
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err).into())
}

/// Writes the children of a container value under an already-open element
fn write_children<W: std::io::Write>(
    writer: &mut Writer<W>,
    value: &Value,
    item_tag: Option<&str>,
) -> crate::Result<()> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                write_entry(writer, key, child)?;
            }
        }
        Value::Array(items) => {
            let tag = item_tag.unwrap_or("item");
            for child in items {
                write_entry(writer, tag, child)?;
            }
        }
        // Scalars only occur through write_entry
        _ => {}
    }
    Ok(())
}

fn write_entry<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &Value,
) -> crate::Result<()> {
    match value {
        Value::Object(_) | Value::Array(_) => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            let singular = singularise(name);
            write_children(writer, value, Some(&singular))?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        scalar => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            writer.write_event(Event::Text(BytesText::new(&scalar_text(scalar))))?;
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
    }
    Ok(())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Singular form of a plural tag name, for naming sequence items.
///
/// A reduced rule set covering the common English plurals; unknown shapes
/// pass through unchanged.
pub fn singularise(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["xes", "ches", "sses", "shes", "oes", "uses"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }
    if word.ends_with("ss") || word.ends_with("us") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }
    word.to_string()
}
