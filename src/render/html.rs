// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::app::Screen;
use crate::error::RenderError;
use crate::view::{KeyedCard, PodcastGrid};

/// Render a screen as a standalone HTML document
pub fn render_html(screen: &Screen) -> String {
    let (title, body) = match screen {
        Screen::Status(message) => (
            "Podcasts".to_string(),
            format!(
                "    <p class=\"status-message\">{}</p>\n",
                encode_text(message)
            ),
        ),
        Screen::Grid {
            title,
            subtitle,
            grid,
        } => (title.clone(), render_main(title, subtitle, grid)),
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"utf-8\">\n    <title>{}</title>\n  </head>\n  <body>\n{body}  </body>\n</html>\n",
        encode_text(&title)
    )
}

/// Render a screen as HTML and write it to `path`
pub fn write_html(screen: &Screen, path: &Path) -> Result<(), RenderError> {
    std::fs::write(path, render_html(screen)).map_err(|e| RenderError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

fn render_main(title: &str, subtitle: &str, grid: &PodcastGrid) -> String {
    let cards: String = grid.cards.iter().map(render_card).collect();

    format!(
        r#"    <main class="app">
      <div class="app__inner">
        <header class="app__header">
          <h1 class="app__title">{}</h1>
          <p class="app__subtitle">{}</p>
        </header>
        <section class="podcast-grid">
{cards}        </section>
      </div>
    </main>
"#,
        encode_text(title),
        encode_text(subtitle),
    )
}

fn render_card(keyed: &KeyedCard) -> String {
    let card = &keyed.card;

    let key = keyed
        .key
        .as_deref()
        .map(|key| format!(" data-key=\"{}\"", encode_double_quoted_attribute(key)))
        .unwrap_or_default();

    let genres = if card.genres.is_empty() {
        String::new()
    } else {
        let items: String = card
            .genres
            .iter()
            .map(|genre| {
                format!(
                    "              <li class=\"podcast-card__genre-tag\">{}</li>\n",
                    encode_text(genre)
                )
            })
            .collect();
        format!("            <ul class=\"podcast-card__genres\">\n{items}            </ul>\n")
    };

    format!(
        r#"          <article class="podcast-card"{key}>
            <img class="podcast-card__image" src="{}" alt="{}" loading="lazy">
            <div class="podcast-card__body">
              <h2 class="podcast-card__title">{}</h2>
              <p class="podcast-card__seasons">{}</p>
{genres}              <p class="podcast-card__updated">{}</p>
            </div>
          </article>
"#,
        encode_double_quoted_attribute(card.image.as_deref().unwrap_or_default()),
        encode_double_quoted_attribute(&card.alt_text),
        encode_text(&card.title),
        encode_text(&card.season_label),
        encode_text(&card.updated),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    use crate::view::PodcastCard;

    fn grid_screen(title: &str, genres: Vec<&'static str>) -> Screen {
        Screen::Grid {
            title: "Podcast Landing Page".to_string(),
            subtitle: "Total podcasts loaded: 1".to_string(),
            grid: PodcastGrid {
                cards: vec![KeyedCard {
                    key: Some("42".to_string()),
                    card: PodcastCard {
                        image: Some("https://example.com/a.jpg?x=1&y=2".to_string()),
                        alt_text: title.to_string(),
                        title: title.to_string(),
                        season_label: "1 season".to_string(),
                        genres,
                        updated: "Updated 3 days ago".to_string(),
                    },
                }],
            },
        }
    }

    #[test]
    fn status_screen_renders_paragraph() {
        let html = render_html(&Screen::Status("Loading podcasts...".to_string()));
        assert!(html.contains(r#"<p class="status-message">Loading podcasts...</p>"#));
        assert!(!html.contains("podcast-grid"));
    }

    #[test]
    fn card_markup_matches_layout() {
        let html = render_html(&grid_screen("Show", vec!["History"]));

        assert!(html.contains(r#"<h1 class="app__title">Podcast Landing Page</h1>"#));
        assert!(html.contains(r#"<p class="app__subtitle">Total podcasts loaded: 1</p>"#));
        assert!(html.contains(r#"<article class="podcast-card" data-key="42">"#));
        assert!(html.contains(r#"alt="Show" loading="lazy""#));
        assert!(html.contains(r#"<h2 class="podcast-card__title">Show</h2>"#));
        assert!(html.contains(r#"<p class="podcast-card__seasons">1 season</p>"#));
        assert!(html.contains(r#"<li class="podcast-card__genre-tag">History</li>"#));
        assert!(html.contains(r#"<p class="podcast-card__updated">Updated 3 days ago</p>"#));
    }

    #[test]
    fn genre_list_omitted_when_empty() {
        let html = render_html(&grid_screen("Show", vec![]));
        assert!(!html.contains("podcast-card__genres"));
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let html = render_html(&grid_screen("<b>\"Tom & Jerry\"</b>", vec![]));

        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("&amp;"));
        assert!(html.contains("a.jpg?x=1&amp;y=2"));
    }

    #[test]
    fn write_html_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("podcasts.html");
        let screen = grid_screen("Show", vec!["Comedy"]);

        write_html(&screen, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_html(&screen));
    }

    #[test]
    fn write_html_reports_path_on_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("podcasts.html");

        let error = write_html(&Screen::Status("x".to_string()), &path).unwrap_err();

        let RenderError::WriteFailed { path: failed, .. } = error;
        assert_eq!(failed, path);
    }
}
