/// One job listing extracted from a search result card.
///
/// Any field may be empty when the card is missing the matching node or
/// attribute. Records are never deduplicated across pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRecord {
    /// Site-assigned listing id, used to rebuild the detail link
    pub id: String,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub summary: String,
}

impl JobRecord {
    #[cfg(test)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        salary: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            salary: salary.into(),
            summary: summary.into(),
        }
    }
}
