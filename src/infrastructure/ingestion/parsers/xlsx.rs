//! Excel (.xlsx) parser: one line per non-empty row, one section per sheet

use async_trait::async_trait;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::ooxml::Package;
use crate::domain::ingestion::format::mime_type_for;
use crate::domain::ingestion::{DocumentMetadata, DocumentParser, ParsedDocument, ParserInput};
use crate::domain::DomainError;

const WORKBOOK_PART: &str = "xl/workbook.xml";
const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";
const SHEET_PREFIX: &str = "xl/worksheets/sheet";

const CELL_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Default)]
pub struct XlsxParser;

impl XlsxParser {
    pub fn new() -> Self {
        Self
    }
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, quick_xml::Error> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Sheet names in workbook order
fn sheet_names(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut names = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"sheet" => {
                names.push(attribute(&e, "name")?.unwrap_or_default());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(names)
}

/// The shared string table; rich-text runs of one entry are concatenated
fn shared_strings(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut strings = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"si" => current.clear(),
                b"t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"si" => strings.push(std::mem::take(&mut current)),
                b"t" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(strings)
}

#[derive(Default)]
struct Cell {
    kind: Option<String>,
    value: String,
}

impl Cell {
    fn resolve(self, shared: &[String]) -> String {
        match self.kind.as_deref() {
            Some("s") => self
                .value
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|index| shared.get(index).cloned())
                .unwrap_or_default(),
            Some("b") => match self.value.trim() {
                "1" => "TRUE".to_string(),
                _ => "FALSE".to_string(),
            },
            _ => self.value,
        }
    }
}

/// Rows of one worksheet, cells joined with [`CELL_SEPARATOR`]
fn sheet_rows(xml: &str, shared: &[String]) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell: Option<Cell> = None;
    let mut in_value = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"row" => row.clear(),
                b"c" => {
                    cell = Some(Cell {
                        kind: attribute(&e, "t")?,
                        value: String::new(),
                    })
                }
                b"v" | b"t" => in_value = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"row" => {
                    let cells: Vec<&str> = row
                        .iter()
                        .map(|c| c.trim())
                        .filter(|c| !c.is_empty())
                        .collect();
                    if !cells.is_empty() {
                        rows.push(cells.join(CELL_SEPARATOR));
                    }
                }
                b"c" => {
                    if let Some(done) = cell.take() {
                        row.push(done.resolve(shared));
                    }
                }
                b"v" | b"t" => in_value = false,
                _ => {}
            },
            Event::Text(t) if in_value => {
                if let Some(cell) = cell.as_mut() {
                    cell.value.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(rows)
}

/// Worksheet parts ordered by their sheet number
fn worksheet_parts(names: Vec<String>) -> Vec<String> {
    let mut parts: Vec<(u32, String)> = names
        .into_iter()
        .filter_map(|name| {
            let number = name
                .strip_prefix(SHEET_PREFIX)?
                .strip_suffix(".xml")?
                .parse::<u32>()
                .ok()?;
            Some((number, name))
        })
        .collect();

    parts.sort_by_key(|(number, _)| *number);
    parts.into_iter().map(|(_, name)| name).collect()
}

#[async_trait]
impl DocumentParser for XlsxParser {
    async fn parse(&self, input: &ParserInput) -> Result<ParsedDocument, DomainError> {
        let mut package = Package::open(input)?;

        let workbook = package.required_part(WORKBOOK_PART)?;
        let names = sheet_names(&workbook).map_err(|e| package.xml_error(WORKBOOK_PART, e))?;

        let shared = match package.part(SHARED_STRINGS_PART)? {
            Some(xml) => {
                shared_strings(&xml).map_err(|e| package.xml_error(SHARED_STRINGS_PART, e))?
            }
            None => Vec::new(),
        };

        let mut sections = Vec::new();
        for (index, part) in worksheet_parts(package.part_names()).into_iter().enumerate() {
            let xml = package.required_part(&part)?;
            let rows = sheet_rows(&xml, &shared).map_err(|e| package.xml_error(&part, e))?;
            if rows.is_empty() {
                continue;
            }

            let name = names
                .get(index)
                .filter(|n| !n.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("Sheet{}", index + 1));
            sections.push(format!("Sheet: {}\n{}", name, rows.join("\n")));
        }

        let mut metadata = DocumentMetadata::new()
            .with_source(&input.filename)
            .with_mime_type(mime_type_for(&input.filename));

        if let Some(title) = package.title()? {
            metadata = metadata.with_title(title);
        }

        Ok(ParsedDocument::new(sections.join("\n\n"), metadata))
    }

    fn name(&self) -> &'static str {
        "xlsx"
    }
}
