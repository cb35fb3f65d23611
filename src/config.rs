/// Validation bounds used by [`crate::Store`]. Lengths count chars, not bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    pub min_name_len: usize,
    pub min_password_len: usize,
    pub max_title_len: usize,
    pub max_content_len: usize,
    pub min_keyword_len: usize,
    pub default_search_results: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_name_len: 2,
            min_password_len: 8,
            max_title_len: 200,
            max_content_len: 5000,
            min_keyword_len: 3,
            default_search_results: 10,
        }
    }
}
