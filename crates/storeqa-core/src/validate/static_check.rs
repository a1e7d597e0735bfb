use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("query is empty")]
    Empty,

    #[error("expected '{expected}' clause on line {line}")]
    MissingClause { expected: &'static str, line: usize },

    #[error("FROM clause names no table")]
    MissingTable,

    #[error("SHOW clause lists no metrics")]
    NoMetrics,

    #[error("invalid SINCE window '{0}', expected -<days>d")]
    InvalidWindow(String),

    #[error("unexpected trailing line: '{0}'")]
    TrailingInput(String),
}

/// The three clauses of a ShopifyQL query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub table: String,
    pub metrics: Vec<String>,
    pub since_days: u32,
}

fn clause<'a>(
    line: Option<&'a str>,
    keyword: &'static str,
    line_no: usize,
) -> Result<&'a str, QueryParseError> {
    line.and_then(|l| l.strip_prefix(keyword))
        .and_then(|rest| rest.strip_prefix(' '))
        .map(str::trim)
        .ok_or(QueryParseError::MissingClause {
            expected: keyword,
            line: line_no,
        })
}

fn parse_window(raw: &str) -> Result<u32, QueryParseError> {
    let invalid = || QueryParseError::InvalidWindow(raw.to_string());

    let days = raw
        .strip_prefix('-')
        .and_then(|r| r.strip_suffix('d'))
        .ok_or_else(invalid)?;
    if !days.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match days.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid()),
    }
}

/// Static parse check of a ShopifyQL query in `FROM` / `SHOW` / `SINCE` form.
pub fn parse_query(text: &str) -> Result<ParsedQuery, QueryParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(QueryParseError::Empty);
    }

    let mut lines = text.lines().map(str::trim);

    let table = clause(lines.next(), "FROM", 1)?;
    if table.is_empty() || table.contains(char::is_whitespace) {
        return Err(QueryParseError::MissingTable);
    }

    let metrics = clause(lines.next(), "SHOW", 2)?
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();
    if metrics.is_empty() {
        return Err(QueryParseError::NoMetrics);
    }

    let since_days = parse_window(clause(lines.next(), "SINCE", 3)?)?;

    if let Some(extra) = lines.find(|l| !l.is_empty()) {
        return Err(QueryParseError::TrailingInput(extra.to_string()));
    }

    Ok(ParsedQuery {
        table: table.to_string(),
        metrics,
        since_days,
    })
}

/// Basic static parse check.
pub fn parse_ok(text: &str) -> Result<(), QueryParseError> {
    parse_query(text).map(|_| ())
}
