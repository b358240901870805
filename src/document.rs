use crate::config::DocumentFormat;
use crate::error::LoadError;
use crate::models::Card;
use crate::parser::parse_lines;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: [&str; 3] = ["txt", "md", "docx"];
const DOCX_BODY: &str = "word/document.xml";

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Lists loadable documents in `dir`, sorted by path.
pub fn document_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file()
                && let Some(ext) = extension_of(&path)
                && SUPPORTED_EXTENSIONS.contains(&ext.as_str())
            {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

pub fn deck_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads a document as an ordered list of paragraphs.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, LoadError> {
    match extension_of(path).as_deref() {
        Some("txt") | Some("md") => {
            let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
            Ok(content.lines().map(str::to_string).collect())
        }
        Some("docx") => read_docx_paragraphs(path),
        _ => Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_docx_paragraphs(path: &Path) -> Result<Vec<String>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let archive_error = |source| LoadError::Archive {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut archive = zip::ZipArchive::new(file).map_err(archive_error)?;
    let mut body = archive.by_name(DOCX_BODY).map_err(archive_error)?;

    let mut xml = String::new();
    body.read_to_string(&mut xml).map_err(io_error)?;

    docx_paragraphs(&xml).map_err(|message| LoadError::Xml {
        path: path.to_path_buf(),
        message,
    })
}

/// Elements whose content is not part of the surrounding paragraph text.
fn is_skipped_content(name: &[u8]) -> bool {
    matches!(name, b"w:txbxContent" | b"mc:Fallback")
}

/// Collects the text of every body `<w:p>` in a WordprocessingML document.
/// Text boxes and fallback shape content are skipped.
pub fn docx_paragraphs(xml: &str) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;
    let mut skip_depth: usize = 0;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| format!("at byte {}: {}", reader.buffer_position(), err))?;

        match event {
            Event::Start(ref e) if is_skipped_content(e.name().as_ref()) => {
                skip_depth += 1;
            }
            Event::End(ref e) if is_skipped_content(e.name().as_ref()) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ if skip_depth > 0 => {}
            Event::Start(ref e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Event::Text(e) => {
                if in_text {
                    let text = e.unescape().map_err(|err| err.to_string())?;
                    current.push_str(&text);
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Cards parsed from a document together with the markers that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub format: DocumentFormat,
    pub cards: Vec<Card>,
}

/// Reads and parses a document. With `format` unset the markers are detected
/// from the document itself.
pub fn load_cards(
    path: &Path,
    format: Option<&DocumentFormat>,
) -> Result<LoadedDocument, LoadError> {
    let paragraphs = read_paragraphs(path)?;
    let format = match format {
        Some(format) => format.clone(),
        None => DocumentFormat::detect(&paragraphs),
    };
    let cards = parse_lines(&paragraphs, &format);
    Ok(LoadedDocument { format, cards })
}
