/// Tags for the report header: the code, the diagnosis and the locality,
/// each lower-cased with spaces removed. Empty values produce no tag, so
/// an unfilled code or diagnosis never renders as a bare `#`.
pub fn report_tags(code: &str, diagnosis: &str, locality: &str) -> Vec<String> {
    [code, diagnosis, locality]
        .into_iter()
        .map(|value| value.replace(' ', "").to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}
