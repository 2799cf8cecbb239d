use std::fmt;

use anyhow::Context as _;

use crate::catalog::CatalogView;

pub const EMPTY_MESSAGE: &str = "No books to show.";

#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Renders the visible records as `book-card` markup.
pub fn render_html(view: &CatalogView<'_>) -> anyhow::Result<String> {
    let mut out = String::new();
    write_html(&mut out, view).context("render html cards")?;
    Ok(out)
}

pub fn render_text(view: &CatalogView<'_>) -> anyhow::Result<String> {
    let mut out = String::new();
    write_text(&mut out, view).context("render text cards")?;
    Ok(out)
}

fn write_html(out: &mut impl fmt::Write, view: &CatalogView<'_>) -> fmt::Result {
    let visible = view.visible_records();
    if visible.is_empty() {
        return writeln!(out, "<p class=\"empty-msg\">{EMPTY_MESSAGE}</p>");
    }

    for (idx, record) in visible.iter().enumerate() {
        writeln!(out, "<div class=\"book-card\">")?;
        writeln!(
            out,
            "  <img src=\"{}\" alt=\"book cover\">",
            escape_html(&record.image_url)
        )?;
        writeln!(out, "  <div class=\"book-meta\">")?;
        writeln!(out, "    <h4>{}</h4>", escape_html(&record.title))?;
        writeln!(out, "    <p>Author: {}</p>", escape_html(&record.author))?;
        writeln!(out, "    <p>Category: {}</p>", escape_html(&record.category))?;
        writeln!(out, "  </div>")?;
        writeln!(
            out,
            "  <button class=\"delete-btn\" data-index=\"{idx}\">Delete</button>"
        )?;
        writeln!(out, "</div>")?;
    }
    Ok(())
}

fn write_text(out: &mut impl fmt::Write, view: &CatalogView<'_>) -> fmt::Result {
    let visible = view.visible_records();
    if visible.is_empty() {
        return writeln!(out, "{EMPTY_MESSAGE}");
    }

    for (idx, record) in visible.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", record.title)?;
        writeln!(out, "  Author: {}", record.author)?;
        writeln!(out, "  Category: {}", record.category)?;
    }
    Ok(())
}
