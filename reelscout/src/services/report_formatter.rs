//! Report formatter
//!
//! Plain-text and HTML bodies for the movie list message.

use crate::models::QualifyingMovie;

pub const REPORT_HEADING: &str = "Top Rated Movies Playing in Edmonton!";
pub const REPORT_SUBJECT: &str = "Movie List";

/// Both renderings of one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub html: String,
}

/// Render the qualifying movies, in the order given
pub fn format_report(movies: &[QualifyingMovie]) -> Report {
    let mut text = format!("{}\n\n", REPORT_HEADING);
    let mut rows = String::new();

    for movie in movies {
        let rating = movie.rating_text();

        text.push_str(&format!("{}     {}\n", movie.title, rating));
        text.push_str(&format!("{}\n", movie.overview));

        rows.push_str(&format!(
            "<tr><td><a href=\"{}\">{}</a></td><td>{}</td></tr>\n",
            escape_html(&movie.reference_link),
            escape_html(&movie.title),
            rating
        ));
        rows.push_str(&format!("<tr><td>{}</td></tr>\n", escape_html(&movie.overview)));
    }

    let html = format!(
        "<html>\n\
         <head></head>\n\
         <body>\n\
         <h1>{}</h1>\n\
         <br>\n\
         <table>\n\
         <tr><th>Movie</th><th>Rating</th></tr>\n\
         {}\
         </table>\n\
         </body>\n\
         </html>\n",
        REPORT_HEADING, rows
    );

    Report { text, html }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
