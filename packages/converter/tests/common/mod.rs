//! Shared fixtures: minimal `.docx` files built in a temporary directory.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Header and body of a small statute.
pub const ROAD_TRAFFIC_ACT: &[&str] = &[
    "도로교통법",
    "[시행 2020. 9. 1.] [법률 제1234호, 2020. 3. 1., 일부개정]",
    "행정안전부 (자치법규과, 02-1234-5678)",
    "제1장 총칙",
    "제1조(목적) 이 법은 도로에서 일어나는 교통상의 위험을 방지한다.",
    "제2조(정의) ①이 법에서 사용하는 용어의 뜻은 다음과 같다.",
    "②이 법에서 \"도로\"란 다음 각 호에 해당하는 곳을 말한다.",
    "1. 「도로법」에 따른 도로",
    "2. 그 밖의 곳",
    "가. 현실적으로 불특정 다수의 사람이 통행하는 곳",
    "제2장 보행자의 통행방법",
    "제3조의2(보행자의 통행) 보행자는 보도로 통행하여야 한다.",
];

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render `word/document.xml` with one paragraph per line.
pub fn document_xml(lines: &[&str]) -> String {
    let body: String = lines
        .iter()
        .map(|line| {
            format!(
                r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                escape(line)
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    )
}

/// Write a `.docx` archive containing the given lines.
pub fn write_docx(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut zip = ZipWriter::new(file);

    zip.start_file("[Content_Types].xml", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"<?xml version=\"1.0\"?><Types/>").unwrap();
    zip.start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(document_xml(lines).as_bytes()).unwrap();
    zip.finish().unwrap();

    path
}

/// Write a file with a `.docx` name that is not a ZIP archive.
pub fn write_broken_docx(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"this is not a zip archive").unwrap();
    path
}
