use actix_web::http::StatusCode;

use crate::database::{actor, show};
use crate::models::actors::CastPage;
use crate::models::listing::{CatalogPage, SortDirection, SortField};
use crate::models::shows::{ShowPage, year_label};
use crate::views::Renderer;

const SITE_TITLE: &str = "Codecool Series";

/// Columns of the listing table that link to a re-sorted listing
const SORTABLE_COLUMNS: [(SortField, &str); 5] = [
    (SortField::Title, "Title"),
    (SortField::Year, "Year"),
    (SortField::Runtime, "Runtime (min)"),
    (SortField::Genres, "Genres"),
    (SortField::Rating, "Rating"),
];

/// Plain server-side HTML pages
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Path of a listing page with an explicit order
pub fn listing_url(page: i64, order_by: SortField, order: SortDirection) -> String {
    format!("/shows/order-by-{order_by}-{order}/{page}")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - {SITE_TITLE}</title>\n</head>\n<body>\n\
         <header><a href=\"/\">{SITE_TITLE}</a> | <a href=\"/shows\">Most rated shows</a></header>\n\
         <main>\n{body}</main>\n</body>\n</html>\n",
        escape(title),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!("<h1>{code} {reason}</h1>\n<p>{}</p>\n", escape(message));

    layout(reason, &body)
}

fn optional_link(url: Option<&str>, label: &str) -> String {
    match url {
        Some(url) if !url.is_empty() => {
            format!("<a href=\"{}\">{}</a>", escape(url), escape(label))
        }
        _ => String::new(),
    }
}

fn optional_text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| escape(&v.to_string())).unwrap_or_default()
}

fn sort_header(page: &CatalogPage) -> String {
    let mut header = String::from("<tr>");
    for (field, label) in SORTABLE_COLUMNS {
        let (order, marker) = if field == page.order_by {
            let marker = match page.order {
                SortDirection::Asc => " &#9650;",
                SortDirection::Desc => " &#9660;",
            };
            (page.order.reversed(), marker)
        } else {
            (SortDirection::Desc, "")
        };
        header.push_str(&format!(
            "<th><a href=\"{}\">{label}</a>{marker}</th>",
            listing_url(1, field, order)
        ));
    }
    header.push_str("<th>Trailer</th><th>Homepage</th></tr>\n");
    header
}

fn show_row(show: &show::Model) -> String {
    format!(
        "<tr><td><a href=\"/show/{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        show.id,
        escape(&show.title),
        year_label(show.year),
        optional_text(show.runtime),
        escape(&show.genres),
        optional_text(show.rating),
        optional_link(show.trailer.as_deref(), "Trailer"),
        optional_link(show.homepage.as_deref(), "Homepage"),
    )
}

/// Previous link, the page window and next link. Window entries outside the
/// catalog are shown without a link.
fn pagination_bar(page: &CatalogPage) -> String {
    let mut bar = String::from("<nav class=\"pagination\">");

    if page.has_prev() {
        bar.push_str(&format!(
            "<a href=\"{}\">&laquo;</a>",
            listing_url(page.page_number - 1, page.order_by, page.order)
        ));
    }

    let visible = page.window.visible_pages(page.total_pages);
    for number in page.window.pages() {
        if number == page.page_number {
            bar.push_str(&format!("<strong>{number}</strong>"));
        } else if !visible.contains(&number) {
            bar.push_str(&format!("<span class=\"disabled\">{number}</span>"));
        } else {
            bar.push_str(&format!(
                "<a href=\"{}\">{number}</a>",
                listing_url(number, page.order_by, page.order)
            ));
        }
    }

    if page.has_next() {
        bar.push_str(&format!(
            "<a href=\"{}\">&raquo;</a>",
            listing_url(page.page_number + 1, page.order_by, page.order)
        ));
    }

    bar.push_str("</nav>\n");
    bar
}

impl Renderer for HtmlRenderer {
    fn index(&self, shows: &[show::Model]) -> String {
        let mut body = String::from("<h1>Shows</h1>\n<ul>\n");
        for show in shows {
            body.push_str(&format!(
                "<li><a href=\"/show/{}\">{}</a></li>\n",
                show.id,
                escape(&show.title)
            ));
        }
        body.push_str("</ul>\n<p><a href=\"/shows\">Browse most rated shows</a></p>\n");

        layout("Shows", &body)
    }

    fn shows(&self, page: &CatalogPage) -> String {
        let mut body = format!(
            "<h1>Shows</h1>\n<p>{} shows, page {} of {}</p>\n<table>\n",
            page.total_count, page.page_number, page.total_pages
        );
        body.push_str(&sort_header(page));
        for show in &page.items {
            body.push_str(&show_row(show));
        }
        body.push_str("</table>\n");
        body.push_str(&pagination_bar(page));

        layout("Shows", &body)
    }

    fn show(&self, page: &ShowPage) -> String {
        let summary = &page.show.summary;
        let mut body = format!("<h1>{}</h1>\n", escape(&summary.title));

        body.push_str(&format!(
            "<p class=\"meta\">{} | {} | {} | Rating: {}</p>\n",
            year_label(summary.year),
            escape(&page.runtime),
            escape(&summary.genres),
            optional_text(summary.rating),
        ));
        if let Some(overview) = &page.show.overview {
            body.push_str(&format!("<p>{}</p>\n", escape(overview)));
        }
        if !page.characters.is_empty() {
            body.push_str(&format!(
                "<p>Stars: {} <a href=\"/show/{}/actors\">Full cast</a></p>\n",
                escape(&page.characters),
                summary.id
            ));
        }
        if !page.trailer_id.is_empty() {
            body.push_str(&format!(
                "<iframe src=\"https://www.youtube.com/embed/{}\" allowfullscreen></iframe>\n",
                escape(&page.trailer_id)
            ));
        }

        if !page.seasons.is_empty() {
            body.push_str("<h2>Seasons</h2>\n<table>\n<tr><th>#</th><th>Title</th><th>Overview</th></tr>\n");
            for season in &page.seasons {
                body.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    season.season_number,
                    optional_text(season.title.as_deref()),
                    optional_text(season.overview.as_deref()),
                ));
            }
            body.push_str("</table>\n");
        }

        layout(&summary.title, &body)
    }

    fn actors(&self, page: &CastPage) -> String {
        let title = &page.show.summary.title;
        let mut body = format!(
            "<h1><a href=\"/show/{}\">{}</a>: cast</h1>\n<table>\n<tr><th>Actor</th><th>Character</th></tr>\n",
            page.show.summary.id,
            escape(title)
        );
        for character in &page.characters {
            body.push_str(&format!(
                "<tr><td><a href=\"/actor/{}\">{}</a></td><td>{}</td></tr>\n",
                character.actor_id,
                escape(&character.actor_name),
                escape(&character.character_name),
            ));
        }
        body.push_str("</table>\n");

        layout(title, &body)
    }

    fn actor(&self, actor: &actor::Model) -> String {
        let mut body = format!("<h1>{}</h1>\n", escape(&actor.name));

        if let Some(birthday) = actor.birthday {
            body.push_str(&format!("<p>Born: {birthday}</p>\n"));
        }
        if let Some(death) = actor.death {
            body.push_str(&format!("<p>Died: {death}</p>\n"));
        }
        if let Some(biography) = &actor.biography {
            body.push_str(&format!("<p>{}</p>\n", escape(biography)));
        }
        body.push_str(&format!(
            "<form method=\"post\" action=\"/actor/{}\">\n\
             <label for=\"name\">Name</label>\n\
             <input id=\"name\" name=\"name\" value=\"{}\" required>\n\
             <button type=\"submit\">Save</button>\n</form>\n",
            actor.id,
            escape(&actor.name)
        ));

        layout(&actor.name, &body)
    }
}
