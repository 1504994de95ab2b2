//! JSON boundary for project snapshots.
//!
//! Accepts the nested shape a relational store returns for
//! `projects` joined with `outcomes(indicators)`, `checkins(kpi_updates)` and
//! `assumptions`. Unknown columns are ignored, missing or `null` child
//! collections become empty, and every parsed project is validated before
//! it is returned.

use serde_json::Value;

use crate::error::CoreResult;
use crate::types::Project;

/// Parses and validates one project from JSON text.
///
/// # Errors
///
/// Returns `CoreError::Json` for malformed JSON or unknown enum spellings,
/// and validation errors from [`Project::validate`].
pub fn parse_project(json: &str) -> CoreResult<Project> {
    let project: Project = serde_json::from_str(json)?;
    project.validate()?;
    Ok(project)
}

/// Parses and validates a JSON array of projects, preserving order.
///
/// # Errors
///
/// Fails on the first project that does not decode or validate.
pub fn parse_projects(json: &str) -> CoreResult<Vec<Project>> {
    let projects: Vec<Project> = serde_json::from_str(json)?;
    for project in &projects {
        project.validate()?;
    }
    Ok(projects)
}

/// Converts an already-decoded JSON value into a validated project.
///
/// # Errors
///
/// Same as [`parse_project`].
pub fn project_from_value(value: Value) -> CoreResult<Project> {
    let project: Project = serde_json::from_value(value)?;
    project.validate()?;
    Ok(project)
}
