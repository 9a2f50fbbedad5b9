//! Client side file filtering for the file upload field.
//!
//! `accept` is a comma separated list. Entries starting with `.` match the
//! end of the file name, ignoring case. Anything else is a MIME pattern where
//! `*` matches any run of characters (`image/*`, `application/vnd.*`).
//! Rejected files are dropped silently.

use dioxus::logger::tracing::{debug, warn};
use regex::Regex;

use super::field::{FileMeta, FileProperties};

#[derive(Clone, Debug)]
enum AcceptEntry {
    Extension(String),
    Mime(Regex),
}

impl AcceptEntry {
    fn matches(&self, file: &FileMeta) -> bool {
        match self {
            AcceptEntry::Extension(ext) => file.name.to_lowercase().ends_with(ext.as_str()),
            AcceptEntry::Mime(pattern) => pattern.is_match(&file.mime),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AcceptList {
    entries: Vec<AcceptEntry>,
}

impl AcceptList {
    pub fn parse(accept: &str) -> Self {
        let entries = accept
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| {
                if entry.starts_with('.') {
                    return Some(AcceptEntry::Extension(entry.to_lowercase()));
                }
                let pattern = entry.split('*').map(regex::escape).collect::<Vec<_>>().join(".*");
                match Regex::new(&format!("(?i)^{pattern}$")) {
                    Ok(re) => Some(AcceptEntry::Mime(re)),
                    Err(err) => {
                        warn!(entry, %err, "skipping unusable accept entry");
                        None
                    }
                }
            })
            .collect();
        Self { entries }
    }

    /// An empty list accepts everything
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn matches(&self, file: &FileMeta) -> bool {
        self.is_empty() || self.entries.iter().any(|entry| entry.matches(file))
    }
}

#[derive(Clone, Debug)]
pub struct FileFilter {
    accept: AcceptList,
    max_size: u64,
}

impl FileFilter {
    pub fn new(accept: &str, max_size: u64) -> Self {
        Self {
            accept: AcceptList::parse(accept),
            max_size,
        }
    }

    pub fn accepts(&self, file: &FileMeta) -> bool {
        if self.max_size > 0 && file.size > self.max_size {
            return false;
        }
        self.accept.matches(file)
    }

    pub fn filter(&self, files: impl IntoIterator<Item = FileMeta>) -> Vec<FileMeta> {
        files
            .into_iter()
            .filter(|file| {
                let ok = self.accepts(file);
                if !ok {
                    debug!(name = %file.name, size = file.size, mime = %file.mime, "file rejected");
                }
                ok
            })
            .collect()
    }
}

impl From<&FileProperties> for FileFilter {
    fn from(props: &FileProperties) -> Self {
        FileFilter::new(&props.accept, props.max_size)
    }
}

/// Best effort MIME type for renderers that only expose file names
pub fn guess_mime(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "zip" => "application/zip",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file(name: &str, size: u64, mime: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size,
            mime: mime.to_string(),
        }
    }

    #[test]
    fn test_size_limit() {
        let filter = FileFilter::new("", 1000);
        assert!(!filter.accepts(&file("big.bin", 1500, "application/octet-stream")));
        assert!(filter.accepts(&file("ok.bin", 1000, "application/octet-stream")));
    }

    #[test]
    fn test_zero_size_is_unlimited() {
        let filter = FileFilter::new("", 0);
        assert!(filter.accepts(&file("huge.iso", u64::MAX, "application/octet-stream")));
    }

    #[test]
    fn test_extension_entries() {
        let filter = FileFilter::new(".pdf", 0);
        assert!(!filter.accepts(&file("report.txt", 10, "text/plain")));
        assert!(filter.accepts(&file("REPORT.PDF", 10, "application/pdf")));

        let filter = FileFilter::new(" .png , .JPG ", 0);
        assert!(filter.accepts(&file("a.jpg", 1, "")));
        assert!(filter.accepts(&file("b.png", 1, "")));
        assert!(!filter.accepts(&file("c.gif", 1, "image/gif")));
    }

    #[test]
    fn test_mime_wildcards() {
        let filter = FileFilter::new("image/*", 0);
        assert!(filter.accepts(&file("cat.png", 10, "image/png")));
        assert!(!filter.accepts(&file("doc.pdf", 10, "application/pdf")));

        let filter = FileFilter::new("application/pdf", 0);
        assert!(filter.accepts(&file("doc.pdf", 10, "application/pdf")));
        assert!(!filter.accepts(&file("doc.pdfx", 10, "application/pdfx")));

        // Entries match the whole type, never a fragment of it
        let filter = FileFilter::new("image", 0);
        assert!(!filter.accepts(&file("cat.png", 10, "image/png")));
    }

    #[test]
    fn test_mixed_list_and_size() {
        let filter = FileFilter::new("image/*,.pdf", 2048);
        let kept = filter.filter(vec![
            file("cat.png", 100, "image/png"),
            file("big.png", 4096, "image/png"),
            file("notes.pdf", 100, ""),
            file("notes.txt", 100, "text/plain"),
        ]);
        let names: Vec<&str> = kept.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["cat.png", "notes.pdf"]);
    }

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("photo.JPEG"), "image/jpeg");
        assert_eq!(guess_mime("README"), "application/octet-stream");
    }
}
