//! Rendering style for generated overloads
//!
//! Every field has a serde default, so an empty `[style]` table renders the
//! same text as [`RenderStyle::default`].

use serde::{Deserialize, Serialize};

/// Text fragments spliced into every generated entry
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderStyle {
    /// Import line at the top of the output
    #[serde(default = "default_import")]
    pub import: String,
    /// Name of the generated functions and of the single-source primitive they nest
    #[serde(default = "default_function")]
    pub function: String,
    #[serde(default = "default_visibility")]
    pub visibility: String,
    /// Availability annotation placed above each declaration
    #[serde(default = "default_availability")]
    pub availability: String,
    /// One indentation level of the body
    #[serde(default = "default_indent")]
    pub indent: String,
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default = "default_parameter_doc")]
    pub parameter_doc: String,
    #[serde(default = "default_content_doc")]
    pub content_doc: String,
    /// Text placed above the import line, such as a license header
    #[serde(default)]
    pub preamble: Option<String>,
}

fn default_import() -> String {
    "import SwiftUI".to_string()
}

fn default_function() -> String {
    "Animated".to_string()
}

fn default_visibility() -> String {
    "public".to_string()
}

fn default_availability() -> String {
    "@available(iOS 13.0, OSX 10.15, tvOS 13.0, watchOS 6.0, *)".to_string()
}

fn default_indent() -> String {
    "\t".to_string()
}

fn default_summary() -> String {
    "A container that animates any view based on the given animatable data.".to_string()
}

fn default_parameter_doc() -> String {
    "Data that animate.".to_string()
}

fn default_content_doc() -> String {
    "A view builder that creates the content to animate.".to_string()
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            import: default_import(),
            function: default_function(),
            visibility: default_visibility(),
            availability: default_availability(),
            indent: default_indent(),
            summary: default_summary(),
            parameter_doc: default_parameter_doc(),
            content_doc: default_content_doc(),
            preamble: None,
        }
    }
}
