//! Server-side rendering of published pages.
//!
//! `GET /p/{slug}` renders the page's widget list to HTML with Leptos. An
//! unknown widget kind renders its placeholder inline; the page itself
//! always succeeds once the slug resolves.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use leptos::prelude::*;
use widgets::WidgetList;

use crate::services::page::{self, PageError};
use crate::state::{AppState, Page};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// `GET /p/{slug}` — full HTML document for a published page.
pub async fn render_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    match page::get_page(&state, &slug).await {
        Ok(page) => Ok(Html(page_document(&page))),
        Err(PageError::NotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Html(not_found_document(&slug)),
        )),
        Err(other) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("<h1>render failed</h1><p>{other}</p>")),
        )),
    }
}

/// Render the widget list into a complete HTML document.
fn page_document(page: &Page) -> String {
    let widgets = page.widgets.clone();
    let body = view! { <WidgetList widgets=widgets/> }.to_html();
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{title}</title>\
         <link rel=\"stylesheet\" href=\"/pkg/pagecraft.css\"/>\
         </head>\
         <body><main class=\"page\">{body}</main></body>\
         </html>",
        title = escape_text(&page.title),
    )
}

fn not_found_document(slug: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/>\
         <title>Not found</title></head>\
         <body><h1>Page not found</h1><p>No page at \"{}\".</p></body></html>",
        escape_text(slug),
    )
}

/// Minimal HTML text escaping for values interpolated outside Leptos views.
fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
