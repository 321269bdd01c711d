//! # brsr-render — The Rendering Boundary
//!
//! Everything past this crate's API is an external collaborator: chart
//! rasterization and PDF layout are not this repository's concern. What
//! lives here is the boundary itself:
//!
//! - [`charts`] — pure builders that turn reconciled section data into
//!   labeled [`ChartDataset`]s. A graphics service (or the browser) turns
//!   datasets into pixels.
//! - [`pdf`] — the [`PdfBackend`] dispatch type with two implementations:
//!   [`MockPdfRenderer`] (deterministic, dependency-free, always
//!   available) and [`RemotePdfRenderer`] (HTTP client for a real
//!   rendering service, configured from the environment).
//!
//! The mock backend exists so every environment — tests, CI, local dev —
//! can exercise the full submit-and-export flow without a rendering
//! service.

pub mod charts;
pub mod pdf;
pub mod remote;

pub use charts::{ChartDataset, ChartKind, ChartSeries, UnknownChartKind};
pub use pdf::{MockPdfRenderer, PdfBackend, RenderError, RenderRequest, RenderedPdf};
pub use remote::{RemotePdfRenderer, RendererConfig, RendererConfigError};
