use serde::Serialize;
use std::fmt;

/// Coarse classification of a checked resource, derived from its
/// Content-Type header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceKind {
    Document,
    Stylesheet,
    Script,
    Image,
    Other,
}

impl ResourceKind {
    pub fn from_content_type(value: &str) -> Self {
        let Ok(content_type) = value.parse::<mime::Mime>() else {
            return ResourceKind::Other;
        };
        match (content_type.type_(), content_type.subtype()) {
            (mime::TEXT, mime::HTML) => ResourceKind::Document,
            (mime::TEXT, mime::CSS) => ResourceKind::Stylesheet,
            (_, mime::JAVASCRIPT) => ResourceKind::Script,
            (mime::IMAGE, _) => ResourceKind::Image,
            _ => ResourceKind::Other,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Document => "Document",
            ResourceKind::Stylesheet => "Stylesheet",
            ResourceKind::Script => "Script",
            ResourceKind::Image => "Image",
            ResourceKind::Other => "Other",
        };
        write!(f, "{name}")
    }
}
