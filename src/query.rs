//! PromQL query construction.
//!
//! Two fixed-shape instant queries per group: a quantile-over-time of the
//! CPU usage rate (scaled to millicores) and the max-over-time of memory
//! max usage (scaled to Mi), both aggregated `by (pod)`.
//!
//! Group names, label filters and the time window end up interpolated into
//! a query language, so they are validated here before any request is
//! built.

use thiserror::Error;

/// Label matchers always present in both queries.
pub const DEFAULT_LABEL_ARGS: &str = r#"container!="",image!="""#;

/// Default time window of usage history.
pub const DEFAULT_WINDOW: &str = "1d";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid group name {0:?}: must be a lowercase RFC 1123 label")]
    InvalidGroupName(String),

    #[error("invalid time window {0:?}: expected <number><s|m|h|d|w>")]
    InvalidWindow(String),

    #[error("invalid label args {0:?}: braces are not allowed")]
    InvalidLabelArgs(String),
}

/// The two queries issued for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupQueries {
    pub cpu: String,
    pub memory: String,
}

/// Validate inputs and build both queries for `group`.
pub fn build_queries(
    group: &str,
    label_args: Option<&str>,
    window: &str,
) -> Result<GroupQueries, QueryError> {
    validate_group_name(group)?;
    validate_window(window)?;
    if let Some(args) = label_args {
        validate_label_args(args)?;
    }

    let labels = merge_label_args(label_args);
    Ok(GroupQueries {
        cpu: cpu_query(group, &labels, window),
        memory: memory_query(group, &labels, window),
    })
}

/// The default label filter, with a group's extra matchers appended.
pub fn merge_label_args(label_args: Option<&str>) -> String {
    match label_args {
        Some(args) if !args.is_empty() => format!("{},{}", DEFAULT_LABEL_ARGS, args),
        _ => DEFAULT_LABEL_ARGS.to_string(),
    }
}

fn cpu_query(group: &str, labels: &str, window: &str) -> String {
    format!(
        r#"sum by (pod)(quantile_over_time(0.95,rate(container_cpu_usage_seconds_total{{namespace="{group}",{labels}}}[1m])[{window}:1m])) * 1000"#
    )
}

fn memory_query(group: &str, labels: &str, window: &str) -> String {
    format!(
        r#"max(max_over_time(container_memory_max_usage_bytes{{namespace="{group}",{labels}}} [{window}:5m])) by (pod) /(1024* 1024)"#
    )
}

/// Group names are Kubernetes namespaces: RFC 1123 labels, max 63 chars.
fn validate_group_name(group: &str) -> Result<(), QueryError> {
    let valid = !group.is_empty()
        && group.len() <= 63
        && group
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !group.starts_with('-')
        && !group.ends_with('-');

    if valid {
        Ok(())
    } else {
        Err(QueryError::InvalidGroupName(group.to_string()))
    }
}

/// Windows are a positive integer plus one of the Prometheus duration units
/// this tool supports.
fn validate_window(window: &str) -> Result<(), QueryError> {
    let invalid = || QueryError::InvalidWindow(window.to_string());

    let mut chars = window.chars();
    let unit = chars.next_back().ok_or_else(invalid)?;
    if !matches!(unit, 's' | 'm' | 'h' | 'd' | 'w') {
        return Err(invalid());
    }
    match chars.as_str().parse::<u64>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(invalid()),
    }
}

/// Label args are passed through verbatim; a brace would break out of the
/// selector they are spliced into.
fn validate_label_args(args: &str) -> Result<(), QueryError> {
    if args.contains(['{', '}']) {
        return Err(QueryError::InvalidLabelArgs(args.to_string()));
    }
    Ok(())
}
