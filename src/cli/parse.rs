use graphic_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Edge as written on the command line; weight falls back to the configured default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Option<i64>,
}

/// Parse `FROM:TO` or `FROM:TO:WEIGHT`
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    let mut parts = s.splitn(3, ':');
    let from = parts.next().unwrap_or_default().trim();
    let to = parts
        .next()
        .map(str::trim)
        .ok_or_else(|| format!("invalid edge '{s}' (expected FROM:TO or FROM:TO:WEIGHT)"))?;

    if from.is_empty() || to.is_empty() {
        return Err(format!("invalid edge '{s}': empty vertex label"));
    }

    let weight = parts
        .next()
        .map(|w| {
            w.trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid edge weight '{w}' (expected an integer)"))
        })
        .transpose()?;

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}
