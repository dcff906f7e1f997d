/// Turn a raw stack status such as `CREATE_IN_PROGRESS` into
/// `Create In Progress`. An empty status reads as `Not created`.
pub fn format_status(status: &str) -> String {
    if status.trim().is_empty() {
        return "Not created".to_string();
    }
    status
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
