// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of selected extensions as JSON, a table, or a detailed list.

use std::io::{IsTerminal, Write};

use colored::Colorize;
use tabled::{
    settings::{object::Columns, Modify, Padding, Style},
    Table, Tabled,
};
use xk6_explore_catalog::PluginDescriptor;
use xk6_explore_core::ExploreError;

/// Width assumed when stdout is not a terminal.
pub const DEFAULT_TERMINAL_WIDTH: usize = 120;

/// Descriptions are never truncated below this many columns.
const MIN_DESC_WIDTH: usize = 20;

const TYPE_COL_WIDTH: usize = 4;
const TIER_COL_WIDTH: usize = 4;

/// Inter-column padding summed over all columns.
const NORMAL_PADDINGS: usize = 10;
const BRIEF_PADDINGS: usize = 4;

const COLUMN_PADDING: usize = 2;
const LIST_MARGIN: usize = 2;
const DOTS: &str = "...";

/// How the selected extensions are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Detailed,
    Table { brief: bool, truncate: bool },
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: Format,
    /// Terminal width in columns.
    pub width: usize,
    /// Colors in the detailed view.
    pub color: bool,
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "MODULE")]
    module: String,
    #[tabled(rename = "LATEST")]
    latest: String,
    #[tabled(rename = "TYPE")]
    kind: &'static str,
    #[tabled(rename = "TIER")]
    tier: &'static str,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

#[derive(Tabled)]
struct BriefRow {
    #[tabled(rename = "MODULE")]
    module: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

/// Write `extensions` to `out` in the requested format.
pub fn render<W: Write>(
    out: &mut W,
    extensions: &[&PluginDescriptor],
    opts: &RenderOptions,
) -> Result<(), ExploreError> {
    match opts.format {
        Format::Json => render_json(out, extensions),
        Format::Detailed => render_detailed(out, extensions, opts.width, opts.color),
        Format::Table { brief, truncate } => {
            render_table(out, extensions, opts.width, brief, truncate)
        }
    }
}

/// Pretty-printed JSON array with two-space indentation.
pub fn render_json<W: Write>(out: &mut W, extensions: &[&PluginDescriptor]) -> Result<(), ExploreError> {
    serde_json::to_writer_pretty(&mut *out, extensions).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

pub fn render_table<W: Write>(
    out: &mut W,
    extensions: &[&PluginDescriptor],
    width: usize,
    brief: bool,
    truncate: bool,
) -> Result<(), ExploreError> {
    let desc_width = description_width(extensions, width, brief);
    let description = |ext: &PluginDescriptor| {
        if truncate {
            truncate_description(&ext.description, desc_width)
        } else {
            ext.description.clone()
        }
    };

    let mut table = if brief {
        Table::new(extensions.iter().map(|ext| BriefRow {
            module: ext.module.clone(),
            description: description(*ext),
        }))
    } else {
        Table::new(extensions.iter().map(|ext| TableRow {
            module: ext.module.clone(),
            latest: ext.latest.clone(),
            kind: ext.extension_type().abbrev(),
            tier: ext.extension_tier().abbrev(),
            description: description(*ext),
        }))
    };

    table
        .with(Style::empty())
        .with(Padding::new(0, COLUMN_PADDING, 0, 0))
        .with(Modify::new(Columns::last()).with(Padding::zero()));

    for line in table.to_string().lines() {
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}

pub fn render_detailed<W: Write>(
    out: &mut W,
    extensions: &[&PluginDescriptor],
    width: usize,
    color: bool,
) -> Result<(), ExploreError> {
    let heading = |s: &str| if color { s.bold().to_string() } else { s.to_string() };
    let link = |s: &str| {
        if color {
            s.blue().underline().to_string()
        } else {
            s.to_string()
        }
    };
    let text = |s: &str| if color { s.italic().to_string() } else { s.to_string() };

    writeln!(out, "{}", heading("Extensions\n----------\n"))?;

    let wrap_width = width.saturating_sub(LIST_MARGIN).max(1);
    let margin = " ".repeat(LIST_MARGIN);

    for ext in extensions {
        writeln!(out, "- {}", heading(&ext.module))?;
        writeln!(
            out,
            "{margin}{} • {} • {} • {}",
            ext.latest,
            ext.extension_type(),
            ext.extension_tier(),
            link(ext.repo_url())
        )?;

        let desc: Vec<String> = word_wrap(&ext.description, wrap_width)
            .iter()
            .map(|line| format!("{margin}{line}"))
            .collect();
        writeln!(out, "{}", text(&desc.join("\n")))?;
        writeln!(out)?;
    }

    Ok(())
}

/// Columns left for descriptions once the widest other cells are placed.
fn description_width(extensions: &[&PluginDescriptor], width: usize, brief: bool) -> usize {
    let widest = extensions
        .iter()
        .map(|ext| {
            let mut len = ext.module.chars().count();
            if !brief {
                len += ext.latest.chars().count() + TYPE_COL_WIDTH + TIER_COL_WIDTH;
            }
            len
        })
        .max()
        .unwrap_or(0);

    let paddings = if brief { BRIEF_PADDINGS } else { NORMAL_PADDINGS };
    width.saturating_sub(widest + paddings).max(MIN_DESC_WIDTH)
}

/// Cut `desc` to at most `width` characters, ending in `...` when shortened.
fn truncate_description(desc: &str, width: usize) -> String {
    if desc.chars().count() <= width {
        return desc.to_string();
    }

    let keep = width.saturating_sub(DOTS.len());
    let mut truncated: String = desc.chars().take(keep).collect();
    truncated.push_str(DOTS);
    truncated
}

/// Greedy word wrap; words longer than `width` stay on their own line.
fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if line_len > 0 && line_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.push_str(word);
            line_len += word_len;
        }

        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Width of the attached terminal, or [`DEFAULT_TERMINAL_WIDTH`].
pub fn terminal_width() -> usize {
    if std::io::stdout().is_terminal()
        && let Ok((cols, _)) = crossterm::terminal::size()
        && cols > 0
    {
        return usize::from(cols);
    }

    DEFAULT_TERMINAL_WIDTH
}
