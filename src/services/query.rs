/// Field qualifiers understood by the Google Books query syntax.
pub const TITLE_QUALIFIER: &str = "intitle:";
pub const AUTHOR_QUALIFIER: &str = "inauthor:";

/// Results are always capped; the cap is not user-configurable so the result
/// table stays renderable.
pub const MAX_RESULTS: u32 = 40;

/// Fixed content-type filter sent with every provider request.
pub const PRINT_TYPE: &str = "books";

/// One search submission: up to three independently optional fields.
///
/// At least one field must be present before the request may reach the
/// network layer; `is_empty` is the single predicate for that check.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub free_text: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl SearchCriteria {
    pub fn new(
        free_text: Option<String>,
        title: Option<String>,
        author: Option<String>,
    ) -> Self {
        Self {
            free_text: normalize_field(free_text),
            title: normalize_field(title),
            author: normalize_field(author),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.free_text.is_none() && self.title.is_none() && self.author.is_none()
    }

    /// Composes the single provider query string. Segment order is fixed
    /// (free text, title qualifier, author qualifier) because it affects
    /// relevance on the provider side.
    ///
    /// The result is not percent-encoded here; encoding happens exactly once
    /// when the string is attached as a query parameter.
    pub fn to_query_string(&self) -> String {
        let mut query = self.free_text.clone().unwrap_or_default();

        if let Some(title) = &self.title {
            query.push('+');
            query.push_str(TITLE_QUALIFIER);
            query.push_str(title);
        }
        if let Some(author) = &self.author {
            query.push('+');
            query.push_str(AUTHOR_QUALIFIER);
            query.push_str(author);
        }

        query
    }
}

fn normalize_field(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
