//! Output formatting
//!
//! Results go to the given writer as indented JSON or as human-readable
//! lines. Errors go to stderr; colors respect NO_COLOR, CLICOLOR,
//! CLICOLOR_FORCE automatically.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::application::services::{BulkDeleteOutcome, DEFAULT_PROFILE};
use crate::domain::{DeleteResponse, DeletionReport, DryRunReport, Post, SiteInfo};

/// Print error (red bold "Error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Error".red().bold(), msg);
}

/// Human-readable rendering of a command result.
pub trait HumanReadable {
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Write `value` as 2-space indented JSON, or in its human-readable form.
pub fn format_output<T>(out: &mut dyn Write, value: &T, json: bool) -> io::Result<()>
where
    T: Serialize + HumanReadable + ?Sized,
{
    if json {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(out, "{}", text)
    } else {
        value.render(out)
    }
}

fn render_post(post: &Post, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "[{}] {}", post.id, post.title_text())?;
    writeln!(
        out,
        "  Status: {} | Date: {}",
        post.status_text(),
        post.date.as_deref().unwrap_or("")
    )?;
    writeln!(out, "  Link: {}", post.link.as_deref().unwrap_or(""))
}

impl HumanReadable for Post {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        render_post(self, out)
    }
}

impl HumanReadable for [Post] {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        self.iter().try_for_each(|post| render_post(post, out))
    }
}

impl HumanReadable for Vec<Post> {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        self.as_slice().render(out)
    }
}

impl HumanReadable for SiteInfo {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        writeln!(out, "Name: {}", field(&self.name))?;
        writeln!(out, "Description: {}", field(&self.description))?;
        writeln!(out, "URL: {}", field(&self.url))?;
        writeln!(out, "Home: {}", field(&self.home))?;
        writeln!(out, "Timezone: {}", field(&self.timezone_string))
    }
}

/// Result of `posts delete`, paired with the requested id.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Deleted<'a> {
    #[serde(skip)]
    pub id: &'a str,
    pub response: &'a DeleteResponse,
}

impl HumanReadable for Deleted<'_> {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Deleted post {} ({})",
            self.id,
            self.response.status_or_deleted()
        )
    }
}

impl HumanReadable for DryRunReport {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Dry run: {} post(s) would be deleted", self.count)?;
        for post in &self.posts {
            writeln!(
                out,
                "  [{}] {} ({})",
                post.id,
                post.title,
                post.status.as_deref().unwrap_or("")
            )?;
        }
        Ok(())
    }
}

impl HumanReadable for DeletionReport {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Deleted {} post(s)", self.deleted)?;
        for result in &self.results {
            writeln!(out, "  [{}] {}", result.id, result.status)?;
        }
        Ok(())
    }
}

/// Write a bulk delete outcome.
pub fn format_bulk_delete(
    out: &mut dyn Write,
    outcome: &BulkDeleteOutcome,
    json: bool,
) -> io::Result<()> {
    match outcome {
        BulkDeleteOutcome::DryRun(report) => format_output(out, report, json),
        BulkDeleteOutcome::Deleted(report) => format_output(out, report, json),
    }
}

/// Usage text.
pub fn help(out: &mut dyn Write) -> io::Result<()> {
    write!(
        out,
        r#"
WordPress Content Manager

Usage:
  wp-content site info [--json]
  wp-content posts list [--status <status>] [--search <text>] [--categories 1,2] [--tags 3,4] [--after <date>] [--before <date>] [--page <n>] [--per_page <n>] [--orderby <field>] [--order asc|desc] [--json]
  wp-content posts get <id> [--json]
  wp-content posts create --title <title> [--content <html>] [--content-file <path>] [--status <status>] [--date <iso>] [--categories 1,2] [--tags 3,4]
  wp-content posts update <id> [--title <title>] [--content <html>] [--content-file <path>] [--status <status>] [--date <iso>] [--categories 1,2] [--tags 3,4]
  wp-content posts delete <id> [--force]
  wp-content posts delete-many [filters] [--dry-run] [--confirm] [--force]

Profiles:
  --profile <name> or WP_PROFILE=<name> (default: {DEFAULT_PROFILE})

"#
    )
}
