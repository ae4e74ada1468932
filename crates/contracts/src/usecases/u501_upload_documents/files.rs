//! File selection rules of the upload drop zone

/// Extensions the backend can index, with their MIME types
pub const ACCEPTED_TYPES: [(&str, &str); 2] = [(".pdf", "application/pdf"), (".csv", "text/csv")];

/// Size limit shown to the user; enforcement is the backend's job.
pub const MAX_FILE_SIZE_MB: u32 = 30;

/// Value for the `accept` attribute of the file input
pub fn accept_attribute() -> String {
    ACCEPTED_TYPES
        .iter()
        .flat_map(|(ext, mime)| [*ext, *mime])
        .collect::<Vec<_>>()
        .join(",")
}

pub fn is_accepted(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ACCEPTED_TYPES.iter().any(|(ext, _)| lower.ends_with(ext))
}

/// A file picked by the user, before it is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn size_label(&self) -> String {
        format_file_size_kb(self.size)
    }
}

/// Split a selection into (accepted, rejected), keeping the original order.
pub fn partition_files(files: Vec<SelectedFile>) -> (Vec<SelectedFile>, Vec<SelectedFile>) {
    files.into_iter().partition(|f| is_accepted(&f.name))
}

/// "(12 KB)" with the byte count rounded to the nearest kilobyte
pub fn format_file_size_kb(bytes: u64) -> String {
    let kb = (bytes as f64 / 1024.0).round() as u64;
    format!("({} KB)", kb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_accepted_ignores_case() {
        assert!(is_accepted("report.pdf"));
        assert!(is_accepted("REPORT.PDF"));
        assert!(is_accepted("sales.Csv"));
        assert!(!is_accepted("notes.txt"));
        assert!(!is_accepted("pdf"));
        assert!(!is_accepted("archive.pdf.zip"));
    }

    #[test]
    fn test_partition_keeps_order() {
        let (accepted, rejected) = partition_files(vec![
            SelectedFile::new("b.csv", 10),
            SelectedFile::new("image.png", 10),
            SelectedFile::new("a.pdf", 10),
        ]);
        let names: Vec<_> = accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.csv", "a.pdf"]);
        assert_eq!(rejected, vec![SelectedFile::new("image.png", 10)]);
    }

    #[test]
    fn test_format_file_size_kb() {
        assert_eq!(format_file_size_kb(0), "(0 KB)");
        assert_eq!(format_file_size_kb(1536), "(2 KB)");
        assert_eq!(format_file_size_kb(1_048_576), "(1024 KB)");
        assert_eq!(SelectedFile::new("a.pdf", 500).size_label(), "(0 KB)");
    }

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,application/pdf,.csv,text/csv");
    }
}
