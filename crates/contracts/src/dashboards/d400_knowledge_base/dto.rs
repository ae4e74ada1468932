use serde::{Deserialize, Serialize};

/// Snapshot returned by `GET /stats`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseStats {
    pub total_documents: u64,
    pub total_chunks: u64,
    /// Vector store collection names
    #[serde(default)]
    pub collections: Vec<String>,
    /// Indexed source file names
    #[serde(default)]
    pub sources: Vec<String>,
}

impl DatabaseStats {
    /// Nothing indexed yet; "Clear All" is pointless in this state
    pub fn is_empty(&self) -> bool {
        self.total_documents == 0
    }

    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }
}

/// Type badge of an indexed source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    Csv,
    Unknown,
}

impl SourceKind {
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            SourceKind::Pdf
        } else if lower.ends_with(".csv") {
            SourceKind::Csv
        } else {
            SourceKind::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Pdf => "PDF",
            SourceKind::Csv => "CSV",
            SourceKind::Unknown => "Unknown",
        }
    }
}

/// Static description of the backend stack shown on the dashboard
pub const DATABASE_INFO: [(&str, &str); 4] = [
    ("Vector Database", "ChromaDB"),
    ("Embedding Model", "all-MiniLM-L6-v2"),
    ("Text Processing", "Recursive Character Splitter"),
    ("AI Model", "Google Gemini Pro"),
];
