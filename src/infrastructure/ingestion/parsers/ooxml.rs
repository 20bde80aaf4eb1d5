//! Office Open XML packages: zip archives of XML parts

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::domain::ingestion::ParserInput;
use crate::domain::DomainError;

pub(super) struct Package<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
    filename: &'a str,
}

impl<'a> Package<'a> {
    pub fn open(input: &'a ParserInput) -> Result<Self, DomainError> {
        let archive = ZipArchive::new(Cursor::new(input.content.as_slice())).map_err(|e| {
            DomainError::ingestion(format!(
                "'{}' is not a valid Office document: {}",
                input.filename, e
            ))
        })?;

        Ok(Self {
            archive,
            filename: &input.filename,
        })
    }

    /// Read a part as text; `None` when the package has no such part
    pub fn part(&mut self, name: &str) -> Result<Option<String>, DomainError> {
        let filename = self.filename;

        let mut file = match self.archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => {
                return Err(DomainError::ingestion(format!(
                    "Failed to open '{}' in '{}': {}",
                    name, filename, e
                )));
            }
        };

        let mut text = String::new();
        file.read_to_string(&mut text).map_err(|e| {
            DomainError::ingestion(format!("Failed to read '{}' in '{}': {}", name, filename, e))
        })?;

        Ok(Some(text))
    }

    /// Read a part the format cannot do without
    pub fn required_part(&mut self, name: &str) -> Result<String, DomainError> {
        self.part(name)?.ok_or_else(|| {
            DomainError::ingestion(format!("'{}' has no '{}' part", self.filename, name))
        })
    }

    pub fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// `dc:title` from the core properties, if set
    pub fn title(&mut self) -> Result<Option<String>, DomainError> {
        let Some(xml) = self.part("docProps/core.xml")? else {
            return Ok(None);
        };

        let title = core_title(&xml).map_err(|e| self.xml_error("docProps/core.xml", e))?;
        Ok(title.filter(|t| !t.is_empty()))
    }

    pub fn xml_error(&self, part: &str, error: quick_xml::Error) -> DomainError {
        DomainError::ingestion(format!(
            "Malformed XML in '{}' of '{}': {}",
            part, self.filename, error
        ))
    }
}

fn core_title(xml: &str) -> Result<Option<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut title: Option<String> = None;
    let mut in_title = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"dc:title" => {
                in_title = true;
                title = Some(String::new());
            }
            Event::End(e) if e.name().as_ref() == b"dc:title" => break,
            Event::Text(t) if in_title => {
                if let Some(title) = title.as_mut() {
                    title.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(title.map(|t| t.trim().to_string()))
}
