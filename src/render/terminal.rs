// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use colored::Colorize;
use console::Emoji;

use crate::app::Screen;
use crate::view::{KeyedCard, PodcastGrid};

static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static IMAGE: Emoji<'_, '_> = Emoji("🖼️  ", "[img] ");
static TAG: Emoji<'_, '_> = Emoji("🏷️  ", "# ");
static CLOCK: Emoji<'_, '_> = Emoji("🕒 ", "");

/// Render a screen as coloured terminal text
pub fn render_terminal(screen: &Screen) -> String {
    match screen {
        Screen::Status(message) => format!("{}\n", message.yellow()),
        Screen::Grid {
            title,
            subtitle,
            grid,
        } => {
            let mut out = format!(
                "\n{MICROPHONE}{}\n{}\n",
                title.bold().magenta(),
                subtitle.dimmed()
            );
            out.push_str(&render_grid(grid));
            out
        }
    }
}

fn render_grid(grid: &PodcastGrid) -> String {
    grid.cards.iter().map(render_card).collect()
}

fn render_card(keyed: &KeyedCard) -> String {
    let card = &keyed.card;
    let mut out = format!("\n{}\n", card.title.bold().green());

    match &card.image {
        Some(url) => out.push_str(&format!("  {IMAGE}{}\n", url.cyan())),
        None if !card.alt_text.is_empty() => {
            out.push_str(&format!("  {IMAGE}{}\n", card.alt_text.dimmed()));
        }
        None => {}
    }

    out.push_str(&format!("  {}\n", card.season_label));

    if !card.genres.is_empty() {
        let tags: Vec<String> = card
            .genres
            .iter()
            .map(|genre| format!("[{}]", genre.blue()))
            .collect();
        out.push_str(&format!("  {TAG}{}\n", tags.join(" ")));
    }

    out.push_str(&format!("  {CLOCK}{}\n", card.updated.dimmed()));
    out
}
