use serde::Serialize;

/// A visual presentation style selectable at deploy time. Descriptive metadata only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub preview_image: String,
    pub description: String,
}

impl Template {
    fn new(id: &str, name: &str, preview_image: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            preview_image: preview_image.to_string(),
            description: description.to_string(),
        }
    }
}

/// The built-in template catalog, in display order.
pub fn default_catalog() -> Vec<Template> {
    vec![
        Template::new(
            "modern",
            "Modern Professional",
            "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?w=400&h=300&fit=crop",
            "Clean, modern design perfect for tech professionals",
        ),
        Template::new(
            "creative",
            "Creative Portfolio",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=300&fit=crop",
            "Vibrant and creative layout for designers and artists",
        ),
        Template::new(
            "minimal",
            "Minimal Elite",
            "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=400&h=300&fit=crop",
            "Minimalist design that focuses on content",
        ),
        Template::new(
            "corporate",
            "Corporate Pro",
            "https://images.unsplash.com/photo-1664382953403-38ba9a1c566d?w=400&h=300&fit=crop",
            "Professional corporate style for business professionals",
        ),
    ]
}
