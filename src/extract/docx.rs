use std::path::Path;

use anyhow::{Context, Result};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

/// Join the text of every top-level paragraph with newlines.
pub fn extract_paragraphs(path: &Path) -> Result<String> {
    let buffer = std::fs::read(path)?;
    let document = read_docx(&buffer)
        .with_context(|| format!("failed to parse DOCX {}", path.display()))?;

    let paragraphs: Vec<String> = document
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(&p.children)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        if let ParagraphChild::Run(run) = child {
            for node in &run.children {
                match node {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    pub(crate) fn write_docx(path: &Path, paragraphs: &[&str]) {
        let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
            docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
        });
        let file = std::fs::File::create(path).unwrap();
        docx.build().pack(file).unwrap();
    }

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memo.docx");
        write_docx(&path, &["Primeiro parágrafo", "Second paragraph", "Third"]);

        let text = extract_paragraphs(&path).unwrap();
        assert_eq!(text, "Primeiro parágrafo\nSecond paragraph\nThird");
    }

    #[test]
    fn test_runs_within_a_paragraph_are_concatenated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.docx");
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Hello, "))
                .add_run(Run::new().add_text("world")),
        );
        docx.build()
            .pack(std::fs::File::create(&path).unwrap())
            .unwrap();

        assert_eq!(extract_paragraphs(&path).unwrap(), "Hello, world");
    }

    #[test]
    fn test_non_zip_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.docx");
        std::fs::write(&path, "not a zip archive").unwrap();

        assert!(extract_paragraphs(&path).is_err());
    }
}
