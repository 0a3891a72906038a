use serde::{Deserialize, Serialize};

/// Styling for DOCX export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text.
    pub body_font: String,

    /// Font for the title line.
    pub title_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub title_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            title_font: "Calibri".to_string(),
            body_size: 11,
            title_size: 14,
        }
    }
}
