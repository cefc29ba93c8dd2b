//! Descriptors for every converter and the encode/decode/validate dispatch contract.
//!
//! A [`Descriptor`] names a converter, places it in a [`Category`] and holds a handler
//! for each [`Operation`] it supports. The [`Registry`] is the ordered, immutable set of
//! all descriptors. Generic callers (the command-line front end, fuzz targets) drive
//! every converter through it without knowing which leaf module does the work.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;
use serde::ser::SerializeStruct;
use tracing::{debug, warn};

use Category::{Crypto, Encoding, Format, Misc};
use Operation::{Decode, Encode, Validate};

use crate::codecs::{base32, base64, binary, hex, html, unicode, url};
use crate::error::{CodecError, Error};
use crate::formats::{csv, json, markdown, sql, xml};
use crate::identifiers::{email, ip, jwt, uuid};
use crate::output::{JwtDecoding, Output, Validation};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encode,
    Decode,
    Validate,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Encode, Decode, Validate];

    /// Capitalized noun used in messages ("Encoding not supported ...").
    pub fn noun(&self) -> &'static str {
        match self {
            Encode => "Encoding",
            Decode => "Decoding",
            Validate => "Validation",
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Encode => "encode",
            Decode => "decode",
            Validate => "validate",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encode" | "enc" | "e" => Ok(Encode),
            "decode" | "dec" | "d" => Ok(Decode),
            "validate" | "format" | "v" => Ok(Validate),
            _ => Err(Error::UnknownOperation(s.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Encoding,
    Format,
    Crypto,
    Misc,
}

impl Category {
    pub const ALL: [Category; 4] = [Encoding, Format, Crypto, Misc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding => "encoding",
            Format => "format",
            Crypto => "crypto",
            Misc => "misc",
        }
    }

    /// Heading used when listing converters by category.
    pub fn title(&self) -> &'static str {
        match self {
            Encoding => "Encoding",
            Format => "Format",
            Crypto => "Crypto",
            Misc => "Miscellaneous",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encoding" => Ok(Encoding),
            "format" => Ok(Format),
            "crypto" => Ok(Crypto),
            "misc" | "miscellaneous" => Ok(Misc),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

/// The function behind one operation of a descriptor, tagged by the shape of its result.
#[derive(Copy, Clone)]
enum Handler {
    Codec(fn(&str) -> Result<String, CodecError>),
    Generate(fn(&str) -> String),
    Validate(fn(&str) -> Validation),
    Jwt(fn(&str) -> JwtDecoding),
}

impl Handler {
    fn call(self, input: &str) -> Result<Output, CodecError> {
        match self {
            Handler::Codec(f) => f(input).map(Output::Text),
            Handler::Generate(f) => Ok(Output::Text(f(input))),
            Handler::Validate(f) => Ok(Output::Validation(f(input))),
            Handler::Jwt(f) => Ok(Output::Jwt(f(input))),
        }
    }
}

/// One converter: its metadata plus a handler for each supported operation.
#[derive(Clone)]
pub struct Descriptor {
    name: &'static str,
    category: Category,
    description: &'static str,
    encode: Option<Handler>,
    decode: Option<Handler>,
    validate: Option<Handler>,
}

impl Descriptor {
    fn new(name: &'static str, category: Category, description: &'static str) -> Self {
        Descriptor {
            name,
            category,
            description,
            encode: None,
            decode: None,
            validate: None,
        }
    }

    fn codec(
        mut self,
        encode: fn(&str) -> Result<String, CodecError>,
        decode: fn(&str) -> Result<String, CodecError>,
    ) -> Self {
        self.encode = Some(Handler::Codec(encode));
        self.decode = Some(Handler::Codec(decode));
        self
    }

    fn validator(mut self, validate: fn(&str) -> Validation) -> Self {
        self.validate = Some(Handler::Validate(validate));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Supported operations, always in encode, decode, validate order.
    pub fn operations(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| self.supports(*op))
            .collect()
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.handler(operation).is_some()
    }

    pub fn encode(&self, input: &str) -> Result<Output, Error> {
        self.run(Encode, input)
    }

    pub fn decode(&self, input: &str) -> Result<Output, Error> {
        self.run(Decode, input)
    }

    pub fn validate(&self, input: &str) -> Result<Output, Error> {
        self.run(Validate, input)
    }

    /// Runs `operation` on `input`, or fails with [`Error::NotSupported`] when this
    /// converter has no such operation.
    pub fn run(&self, operation: Operation, input: &str) -> Result<Output, Error> {
        let Some(handler) = self.handler(operation) else {
            debug!(converter = self.name, %operation, "operation not supported");
            return Err(Error::NotSupported {
                converter: self.name.to_string(),
                operation,
            });
        };

        debug!(converter = self.name, %operation, input_len = input.len(), "dispatch");

        handler.call(input).map_err(|e| {
            warn!(converter = self.name, %operation, error = %e, "conversion failed");
            Error::from(e)
        })
    }

    fn handler(&self, operation: Operation) -> Option<Handler> {
        match operation {
            Encode => self.encode,
            Decode => self.decode,
            Validate => self.validate,
        }
    }
}

impl std::fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("operations", &self.operations())
            .finish()
    }
}

impl Serialize for Descriptor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Descriptor", 4)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("description", self.description)?;
        state.serialize_field("operations", &self.operations())?;
        state.end()
    }
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::standard);

/// Ordered, immutable set of converter descriptors.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: Vec<Descriptor>,
}

impl Registry {
    /// Every built-in converter, in declaration order.
    pub fn standard() -> Registry {
        let descriptors = vec![
            Descriptor::new(
                "Base64",
                Encoding,
                "Convert text to and from Base64 encoding. Useful for encoding binary data for transfer over text protocols.",
            )
            .codec(base64::encode, base64::decode),
            Descriptor::new(
                "URL",
                Encoding,
                "Encode/decode text for URLs. Converts special characters to %XX format for safe transmission in URLs.",
            )
            .codec(url::encode, url::decode),
            Descriptor::new(
                "HTML",
                Encoding,
                "Convert text to and from HTML entities. Useful for safely displaying text in HTML documents.",
            )
            .codec(html::encode, html::decode),
            Descriptor::new(
                "Hex",
                Encoding,
                "Convert text to and from hexadecimal encoding. Represents each character as a two-digit hex value.",
            )
            .codec(hex::encode, hex::decode),
            Descriptor::new(
                "Binary",
                Encoding,
                "Convert text to and from binary representation. Each character is converted to its 8-bit binary form.",
            )
            .codec(binary::encode, binary::decode),
            Descriptor::new(
                "Base32",
                Encoding,
                "Convert text to and from Base32 encoding. Uses a 32-character set that is case-insensitive and avoids confusing characters.",
            )
            .codec(base32::encode, base32::decode),
            Descriptor::new(
                "Unicode",
                Encoding,
                r"Convert text to and from Unicode escape sequences (\uXXXX format). Useful for encoding special characters.",
            )
            .codec(unicode::encode, unicode::decode),
            Descriptor::new(
                "JSON",
                Format,
                "Validate and format JSON data. Checks syntax and provides pretty-printing for valid JSON.",
            )
            .validator(json::validate),
            Descriptor::new(
                "XML",
                Format,
                "Validate and format XML data. Checks syntax and provides pretty-printing for valid XML.",
            )
            .validator(xml::validate),
            Descriptor::new(
                "CSV",
                Format,
                "Format and validate CSV data. Provides basic validation and formatting for CSV files.",
            )
            .validator(csv::validate),
            Descriptor::new(
                "Markdown",
                Format,
                "Format markdown text. Makes markdown more readable with consistent spacing and indentation.",
            )
            .validator(markdown::validate),
            Descriptor::new(
                "SQL",
                Format,
                "Format SQL queries. Makes SQL more readable with proper indentation and keyword formatting.",
            )
            .validator(sql::validate),
            Descriptor {
                decode: Some(Handler::Jwt(jwt::decode)),
                ..Descriptor::new(
                    "JWT Decoder",
                    Crypto,
                    "Decode JSON Web Tokens. Extracts header and payload data from JWT tokens (signature not verified).",
                )
            },
            Descriptor {
                encode: Some(Handler::Generate(uuid::encode)),
                ..Descriptor::new(
                    "UUID Generator",
                    Crypto,
                    "Generate a new random UUID (Universally Unique Identifier) in standard format.",
                )
            },
            Descriptor::new(
                "Email Validator",
                Misc,
                "Validate email addresses. Checks if an email address follows the correct format.",
            )
            .validator(email::validate),
            Descriptor::new(
                "IP Address Validator",
                Misc,
                "Validate IPv4 and IPv6 addresses. Checks if an IP address follows the correct format.",
            )
            .validator(ip::validate),
        ];

        Registry { descriptors }
    }

    /// Process-wide instance of [`Registry::standard`], built on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Looks up a converter by name, ignoring ASCII case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        let name = name.trim();
        self.iter().find(|d| d.name.eq_ignore_ascii_case(name))
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Descriptor> {
        self.iter().filter(move |d| d.category == category)
    }

    /// Case-insensitive substring match over name and description, in declaration
    /// order. A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Descriptor> {
        let needle = term.trim().to_lowercase();
        self.iter()
            .filter(|d| {
                needle.is_empty()
                    || d.name.to_lowercase().contains(&needle)
                    || d.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// [`Registry::search`] restricted to `category` (all categories when `None`),
    /// sorted by name.
    pub fn filter(&self, term: &str, category: Option<Category>) -> Vec<&Descriptor> {
        let mut found: Vec<&Descriptor> = self
            .search(term)
            .into_iter()
            .filter(|d| category.is_none_or(|c| d.category == c))
            .collect();
        found.sort_by_key(|d| d.name.to_lowercase());
        found
    }

    /// Number of converters in each category, in [`Category::ALL`] order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.by_category(c).count()))
            .collect()
    }

    /// Looks up `name` and runs `operation` on `input`.
    pub fn invoke(&self, name: &str, operation: Operation, input: &str) -> Result<Output, Error> {
        let Some(descriptor) = self.get(name) else {
            debug!(converter = name, "unknown converter");
            return Err(Error::UnknownConverter(name.to_string()));
        };
        descriptor.run(operation, input)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
