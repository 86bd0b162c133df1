//! packages.config parser for NuGet projects
//!
//! Handles:
//! - `<package .../>` and `<package ...></package>` entries under `<packages>`
//! - Missing attributes (decoded as empty strings)
//! - Namespace-prefixed element and attribute names
//! - A leading UTF-8 byte order mark

use crate::domain::PackageReference;
use crate::error::ManifestError;
use crate::manifest::PACKAGES_CONFIG;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::PathBuf;

const ROOT_ELEMENT: &[u8] = b"packages";
const PACKAGE_ELEMENT: &[u8] = b"package";

/// Parser for packages.config files
pub struct PackagesConfigParser;

impl PackagesConfigParser {
    /// Decode the `<package>` entries directly under the `<packages>` root
    pub fn parse(content: &str) -> Result<Vec<PackageReference>, ManifestError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut references = Vec::new();
        // Element nesting depth; 1 means "directly inside <packages>".
        let mut depth = 0usize;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| malformed(format!("{} at position {}", e, reader.error_position())))?;

            match event {
                Event::Start(element) => {
                    if depth == 0 {
                        check_root(&element)?;
                    } else if depth == 1 && is_package(&element) {
                        references.push(read_reference(&element)?);
                    }
                    depth += 1;
                }
                Event::Empty(element) => {
                    if depth == 0 {
                        // `<packages/>` is a valid manifest with no entries
                        check_root(&element)?;
                        return Ok(references);
                    }
                    if depth == 1 && is_package(&element) {
                        references.push(read_reference(&element)?);
                    }
                }
                Event::End(element) => {
                    if depth == 0 {
                        return Err(malformed(format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(element.name().as_ref())
                        )));
                    }
                    depth -= 1;
                    if depth == 0 {
                        return Ok(references);
                    }
                }
                Event::Eof => {
                    return Err(if depth == 0 {
                        malformed("missing root element <packages>")
                    } else {
                        malformed("unexpected end of file inside <packages>")
                    });
                }
                _ => {}
            }
        }
    }
}

fn malformed(message: impl Into<String>) -> ManifestError {
    ManifestError::malformed(PathBuf::from(PACKAGES_CONFIG), message)
}

fn is_package(element: &BytesStart<'_>) -> bool {
    element.local_name().as_ref() == PACKAGE_ELEMENT
}

fn check_root(element: &BytesStart<'_>) -> Result<(), ManifestError> {
    if element.local_name().as_ref() == ROOT_ELEMENT {
        Ok(())
    } else {
        Err(malformed(format!(
            "expected root element <packages> but found <{}>",
            String::from_utf8_lossy(element.name().as_ref())
        )))
    }
}

fn read_reference(element: &BytesStart<'_>) -> Result<PackageReference, ManifestError> {
    let mut reference = PackageReference::new("", "");

    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| malformed(e.to_string()))?;
        let slot = match attribute.key.local_name().as_ref() {
            b"id" => &mut reference.id,
            b"version" => &mut reference.version,
            b"targetFramework" => &mut reference.target_framework,
            _ => continue,
        };
        *slot = attribute
            .unescape_value()
            .map_err(|e| malformed(e.to_string()))?
            .into_owned();
    }

    Ok(reference)
}
