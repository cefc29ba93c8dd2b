//! XML well-formedness check and pretty-printer.
//!
//! The document is checked with a pull parser and written back event by event with
//! whitespace-only text nodes dropped. Entity references must be predefined, numeric,
//! or declared in the DOCTYPE. The result is then broken at every `><` boundary and
//! indented line by line: a closing-tag line steps out one level before it is written,
//! an opening-tag line steps in one level after it is written.

use std::collections::HashSet;
use std::sync::LazyLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use regex::Regex;
use tracing::trace;

use crate::output::Validation;

const INDENT: &str = "  ";

const PREDEFINED_ENTITIES: &[&str] = &["amp", "lt", "gt", "quot", "apos"];

/// Names of general entities declared in a DOCTYPE internal subset. Parameter
/// entities (`<!ENTITY % name ...>`) are skipped.
static ENTITY_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!ENTITY\s+([^\s%][^\s]*)").expect("entity pattern is valid")
});

#[derive(thiserror::Error, Debug)]
enum MalformedXml {
    #[error("{message} at position {position}")]
    Syntax { message: String, position: u64 },

    #[error("character {character:?} not allowed at position {position}")]
    Character { character: char, position: usize },

    #[error("invalid name <{0}>")]
    Name(String),

    #[error("invalid attribute in <{element}>: {message}")]
    Attribute { element: String, message: String },

    #[error("undefined entity reference &{0};")]
    UndefinedEntity(String),

    #[error("invalid character reference &{0};")]
    CharacterReference(String),

    #[error("XML declaration is only allowed at the start of the document")]
    MisplacedDeclaration,

    #[error("DOCTYPE is only allowed once, before the root element")]
    MisplacedDoctype,

    #[error("']]>' is not allowed in text")]
    CdataEndInText,

    #[error("no root element")]
    NoRoot,

    #[error("more than one root element (second root <{0}>)")]
    MultipleRoots(String),

    #[error("text outside the root element")]
    TextOutsideRoot,

    #[error("unclosed element <{0}>")]
    Unclosed(String),

    #[error("could not re-serialize document: {0}")]
    Serialize(String),
}

pub fn validate(input: &str) -> Validation {
    match reserialize(input) {
        Ok(serialized) => Validation::formatted(indent(&serialized)),
        Err(e) => Validation::invalid(format!("XML parsing error: {e}")),
    }
}

fn reserialize(input: &str) -> Result<String, MalformedXml> {
    check_characters(input)?;

    let mut reader = Reader::from_str(input);
    reader.config_mut().check_comments = true;

    let mut writer = Writer::new(Vec::with_capacity(input.len()));
    let mut open: Vec<String> = Vec::new();
    let mut entities: HashSet<String> = HashSet::new();
    let mut text_run: Vec<Event> = Vec::new();
    let mut at_start = true;
    let mut seen_doctype = false;
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| MalformedXml::Syntax {
            message: e.to_string(),
            position: reader.error_position(),
        })?;
        let first_event = std::mem::replace(&mut at_start, false);

        // Adjacent text and references form one text node; it is only dropped when
        // the whole node is whitespace.
        let in_text_node = match &event {
            Event::Text(text) => {
                if open.is_empty() && !is_blank(text) {
                    return Err(MalformedXml::TextOutsideRoot);
                }
                if text.windows(3).any(|w| w == b"]]>") {
                    return Err(MalformedXml::CdataEndInText);
                }
                true
            }
            Event::GeneralRef(reference) => {
                if open.is_empty() {
                    return Err(MalformedXml::TextOutsideRoot);
                }
                check_reference(&String::from_utf8_lossy(reference), &entities)?;
                true
            }
            _ => false,
        };
        if in_text_node {
            text_run.push(event);
            continue;
        }
        flush_text(&mut writer, &mut text_run)?;

        match &event {
            Event::Eof => break,
            Event::Decl(_) if !first_event => return Err(MalformedXml::MisplacedDeclaration),
            Event::DocType(doctype) => {
                if seen_doctype || seen_root {
                    return Err(MalformedXml::MisplacedDoctype);
                }
                seen_doctype = true;
                entities = declared_entities(&String::from_utf8_lossy(doctype));
            }
            Event::Start(start) | Event::Empty(start) => {
                let name = element_name(start);
                check_name(&name)?;
                check_attributes(start, &name, &entities)?;

                if open.is_empty() {
                    if seen_root {
                        return Err(MalformedXml::MultipleRoots(name));
                    }
                    seen_root = true;
                }

                if matches!(event, Event::Start(_)) {
                    open.push(name);
                }
            }
            Event::End(_) => {
                open.pop();
            }
            Event::CData(_) if open.is_empty() => return Err(MalformedXml::TextOutsideRoot),
            _ => {}
        }

        write(&mut writer, event)?;
    }

    if let Some(name) = open.pop() {
        return Err(MalformedXml::Unclosed(name));
    }
    if !seen_root {
        return Err(MalformedXml::NoRoot);
    }

    String::from_utf8(writer.into_inner()).map_err(|e| MalformedXml::Serialize(e.to_string()))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event) -> Result<(), MalformedXml> {
    writer
        .write_event(event)
        .map_err(|e| MalformedXml::Serialize(e.to_string()))
}

fn flush_text(writer: &mut Writer<Vec<u8>>, run: &mut Vec<Event>) -> Result<(), MalformedXml> {
    let blank = run
        .iter()
        .all(|event| matches!(event, Event::Text(text) if is_blank(text)));

    if blank {
        run.clear();
        return Ok(());
    }
    for event in run.drain(..) {
        write(writer, event)?;
    }
    Ok(())
}

fn is_blank(text: &[u8]) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn check_characters(input: &str) -> Result<(), MalformedXml> {
    match input.char_indices().find(|&(_, c)| !is_xml_char(c)) {
        Some((position, character)) => Err(MalformedXml::Character { character, position }),
        None => Ok(()),
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9'
            | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}

fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char)
}

fn check_name(name: &str) -> Result<(), MalformedXml> {
    if is_name(name) {
        Ok(())
    } else {
        Err(MalformedXml::Name(name.to_string()))
    }
}

fn declared_entities(doctype: &str) -> HashSet<String> {
    ENTITY_DECLARATION
        .captures_iter(doctype)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// `reference` is the text between `&` and `;`.
fn check_reference(reference: &str, entities: &HashSet<String>) -> Result<(), MalformedXml> {
    let Some(number) = reference.strip_prefix('#') else {
        if PREDEFINED_ENTITIES.contains(&reference) || entities.contains(reference) {
            return Ok(());
        }
        return Err(MalformedXml::UndefinedEntity(reference.to_string()));
    };

    let (digits, radix) = match number.strip_prefix('x') {
        Some(hex) => (hex, 16),
        None => (number, 10),
    };

    let valid = !digits.is_empty()
        && digits.chars().all(|c| c.is_digit(radix))
        && u32::from_str_radix(digits, radix)
            .ok()
            .and_then(char::from_u32)
            .is_some_and(is_xml_char);

    if valid {
        Ok(())
    } else {
        Err(MalformedXml::CharacterReference(reference.to_string()))
    }
}

fn element_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn check_attributes(
    start: &BytesStart,
    element: &str,
    entities: &HashSet<String>,
) -> Result<(), MalformedXml> {
    let invalid = |message: String| MalformedXml::Attribute {
        element: element.to_string(),
        message,
    };

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| invalid(e.to_string()))?;

        let key = String::from_utf8_lossy(attribute.key.as_ref());
        if !is_name(&key) {
            return Err(invalid(format!("invalid attribute name {key:?}")));
        }

        let value = String::from_utf8_lossy(&attribute.value);
        if value.contains('<') {
            return Err(invalid(format!("'<' in the value of {key}")));
        }

        let mut rest = value.as_ref();
        while let Some(amp) = rest.find('&') {
            let after = &rest[amp + 1..];
            let Some(semi) = after.find(';') else {
                return Err(invalid(format!("unterminated reference in the value of {key}")));
            };
            check_reference(&after[..semi], entities)?;
            rest = &after[semi + 1..];
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum LineKind {
    Opening,
    Closing,
    Other,
}

fn indent(serialized: &str) -> String {
    let broken = serialized.replace("><", ">\n<");
    let mut out = String::with_capacity(broken.len() * 2);
    let mut level: usize = 0;

    for line in broken.lines() {
        let kind = classify(line);
        trace!(level, ?kind, line, "xml line");

        if kind == LineKind::Closing {
            // Clamped at zero on unbalanced input.
            level = level.saturating_sub(1);
        }

        out.push_str(&INDENT.repeat(level));
        out.push_str(line);
        out.push('\n');

        if kind == LineKind::Opening {
            level += 1;
        }
    }

    out
}

fn classify(line: &str) -> LineKind {
    if line.starts_with("</") {
        return LineKind::Closing;
    }
    if !line.starts_with('<') || line.starts_with("<?") || line.starts_with("<!") {
        return LineKind::Other;
    }

    let Some(tag_end) = find_tag_end(line) else {
        return LineKind::Other;
    };

    let self_closing = line[..tag_end].ends_with('/');
    let closed_on_same_line = line[tag_end..].contains("</");

    if self_closing || closed_on_same_line {
        LineKind::Other
    } else {
        LineKind::Opening
    }
}

/// Byte offset of the `>` that ends the tag starting at offset 0, skipping quoted
/// attribute values.
fn find_tag_end(line: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;

    for (i, byte) in line.bytes().enumerate() {
        match (quote, byte) {
            (None, b'"' | b'\'') => quote = Some(byte),
            (Some(q), _) if q == byte => quote = None,
            (None, b'>') => return Some(i),
            _ => {}
        }
    }

    None
}
