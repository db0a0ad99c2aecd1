use serde::Serialize;

/// One of the decorative themes listed on the gallery page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub screenshot: String,
    pub tags: Vec<String>,
}
