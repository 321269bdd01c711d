//! # PDF Rendering Backends
//!
//! The PDF boundary: a request type describing what to render, and a
//! backend dispatch over the two implementations. Layout, fonts, and
//! typography belong to the rendering service — the mock backend produces
//! a deterministic single-page cover sheet so the export flow works in
//! every environment.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use brsr_core::ReportId;

use crate::remote::RemotePdfRenderer;

/// What to render: the report's identity plus its full section payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    /// The report being exported.
    pub report_id: ReportId,
    /// Name of the disclosing entity.
    pub company_name: String,
    /// Financial year covered by the disclosure.
    pub financial_year: String,
    /// Lifecycle status string (DRAFT / SUBMITTED).
    pub status: String,
    /// Canonical submission digest, when the report has been submitted.
    pub digest_hex: Option<String>,
    /// Wire-keyed section payloads, row IDs already stripped.
    pub sections: Value,
}

/// A rendered document.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    /// The document bytes.
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`. Always `application/pdf`.
    pub content_type: &'static str,
}

/// Error producing a rendered document.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The remote rendering service could not be reached or answered
    /// with a transport-level failure.
    #[error("render service unreachable at {endpoint}: {source}")]
    Unreachable {
        /// The endpoint that failed.
        endpoint: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The remote rendering service answered with a non-success status.
    #[error("render service returned {status} for {endpoint}")]
    Failed {
        /// The endpoint that failed.
        endpoint: String,
        /// The HTTP status returned.
        status: u16,
    },
}

/// The configured PDF backend.
///
/// Dispatch is an enum rather than a trait object: there are exactly two
/// implementations and handlers need `Clone + Send + Sync` without boxing.
#[derive(Debug, Clone)]
pub enum PdfBackend {
    /// Deterministic in-process renderer.
    Mock(MockPdfRenderer),
    /// HTTP client for a real rendering service.
    Remote(RemotePdfRenderer),
}

impl PdfBackend {
    /// The always-available default backend.
    pub fn mock() -> Self {
        Self::Mock(MockPdfRenderer)
    }

    /// Render the request on whichever backend is configured.
    pub async fn render(&self, request: &RenderRequest) -> Result<RenderedPdf, RenderError> {
        match self {
            Self::Mock(renderer) => Ok(renderer.render(request)),
            Self::Remote(renderer) => renderer.render(request).await,
        }
    }

    /// A short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mock(_) => "mock",
            Self::Remote(_) => "remote",
        }
    }
}

/// Deterministic in-process PDF renderer.
///
/// Assembles a minimal, valid, uncompressed single-page PDF: a cover sheet
/// with the report identity, status, submission digest, and one line per
/// section present in the payload. Same request in, same bytes out.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPdfRenderer;

impl MockPdfRenderer {
    /// Render the cover-sheet PDF.
    pub fn render(&self, request: &RenderRequest) -> RenderedPdf {
        let mut lines = vec![
            "Business Responsibility and Sustainability Report".to_string(),
            format!("Entity: {}", display_or_dash(&request.company_name)),
            format!("Financial year: {}", display_or_dash(&request.financial_year)),
            format!("Report: {}", request.report_id),
            format!("Status: {}", request.status),
        ];
        if let Some(digest) = &request.digest_hex {
            lines.push(format!("Digest: sha256:{digest}"));
        }
        lines.push(String::new());
        if let Some(sections) = request.sections.as_object() {
            for key in sections.keys() {
                lines.push(format!("- {key}"));
            }
        }
        RenderedPdf {
            bytes: build_pdf(&lines),
            content_type: "application/pdf",
        }
    }
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Escape a string for a PDF literal string object.
fn escape_pdf_text(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .flat_map(|c| match c {
            '(' | ')' | '\\' => vec!['\\', c],
            other => vec![other],
        })
        .collect()
}

/// Assemble a single-page PDF with one text line per entry in `lines`.
fn build_pdf(lines: &[String]) -> Vec<u8> {
    // Content stream: Helvetica 11pt, 16pt leading, starting near the top
    // of an A4 page.
    let mut content = String::from("BT\n/F1 11 Tf\n16 TL\n72 780 Td\n");
    for line in lines {
        content.push_str(&format!("({}) Tj\nT*\n", escape_pdf_text(line)));
    }
    content.push_str("ET\n");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    out
}
