#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    /// `#rrggbb`
    pub color: String,
    pub description: Option<String>,
}
