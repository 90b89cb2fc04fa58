//! Response rendering for the tabular endpoints.
//!
//! Every data endpoint takes a `format` query parameter: `text` returns
//! comma-separated lines, `csv`/`file` return a quoted CSV attachment, and
//! `html` returns a styled table. The same renderer serves the table list,
//! the field list, and query results.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Text,
    Csv,
    File,
    Html,
}

impl TableFormat {
    fn is_attachment(self) -> bool {
        matches!(self, TableFormat::Csv | TableFormat::File)
    }
}

/// Presentation extras for HTML output and attachment naming.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub download_name: Option<String>,
}

const HTML_STYLE: &str = "<head> <style> table { font-family: arial, sans-serif; \
     border-collapse: collapse; width: 80%; } \
     td, th { border: 1px solid #dddddd; text-align: left; padding: 8px; } \
     tr:nth-child(even) { background-color: #dddddd; } </style> </head>";

/// Render a two-dimensional table.
pub fn render_table(
    format: TableFormat,
    columns: &[String],
    rows: &[Vec<String>],
    options: &RenderOptions,
) -> Response {
    match format {
        TableFormat::Text => {
            let mut lines = Vec::with_capacity(rows.len() + 1);
            if !columns.is_empty() {
                lines.push(columns.join(","));
            }
            for row in rows {
                lines.push(row.join(","));
            }
            lines.join("\n").into_response()
        }
        TableFormat::Csv | TableFormat::File => {
            let mut lines = Vec::with_capacity(rows.len() + 1);
            if !columns.is_empty() {
                lines.push(columns.join(","));
            }
            for row in rows {
                let quoted: Vec<String> = row.iter().map(|cell| format!("\"{cell}\"")).collect();
                lines.push(quoted.join(","));
            }
            attachment(lines.join("\n"), options)
        }
        TableFormat::Html => {
            let mut html = String::from(HTML_STYLE);
            html.push_str("<html><body>");
            if let Some(title) = &options.title {
                html.push_str(&format!("<h2>{title}</h2>"));
            }
            if let Some(subtitle) = &options.subtitle {
                html.push_str(&format!("<h4>{subtitle}</h4>"));
            }
            html.push_str("<table border='1'>");
            if !columns.is_empty() {
                html.push_str("<tr>");
                for col in columns {
                    html.push_str(&format!("<th>{col}</th>"));
                }
                html.push_str("</tr>");
            }
            for row in rows {
                html.push_str("<tr>");
                for cell in row {
                    html.push_str(&format!("<td>{cell}</td>"));
                }
                html.push_str("</tr>");
            }
            html.push_str("</table></body></html>");
            Html(html).into_response()
        }
    }
}

/// Render a one-dimensional list (table names, field names).
pub fn render_list(format: TableFormat, items: &[String], options: &RenderOptions) -> Response {
    if format == TableFormat::Html {
        let mut html = String::from(HTML_STYLE);
        html.push_str("<html><body>");
        if let Some(title) = &options.title {
            html.push_str(&format!("<h2>{title}</h2>"));
        }
        html.push_str("<ul>");
        for item in items {
            html.push_str(&format!("<li>{item}</li>"));
        }
        html.push_str("</ul></body></html>");
        return Html(html).into_response();
    }

    let content = items.join(",");
    if format.is_attachment() {
        attachment(content, options)
    } else {
        content.into_response()
    }
}

fn attachment(content: String, options: &RenderOptions) -> Response {
    let name = options.download_name.as_deref().unwrap_or("table");
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={name}.csv"),
            ),
        ],
        content,
    )
        .into_response()
}
