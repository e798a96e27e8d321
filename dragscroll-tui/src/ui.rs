//! Demo scene: a few shelves of cards, each one a horizontal slider.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use dragscroll::{Document, Node, Rect, ScrollElement, SliderConfig, SliderSet};

const CARD_WIDTH: u16 = 14;
const CARD_GAP: u16 = 2;
const CARD_STRIDE: u16 = CARD_WIDTH + CARD_GAP;
const SHELF_HEIGHT: u16 = 5;
const SHELF_SPACING: u16 = 2;
const TOP: u16 = 3;
const MARGIN: u16 = 2;

const BACKGROUND: Color = Color::Rgb {
    r: 24,
    g: 26,
    b: 33,
};
const MUTED: Color = Color::Rgb {
    r: 120,
    g: 126,
    b: 140,
};
const ACCENT: Color = Color::Rgb {
    r: 250,
    g: 200,
    b: 90,
};
const CARD_COLORS: [Color; 6] = [
    Color::Rgb { r: 70, g: 90, b: 160 },
    Color::Rgb { r: 60, g: 130, b: 120 },
    Color::Rgb { r: 150, g: 80, b: 110 },
    Color::Rgb { r: 120, g: 110, b: 60 },
    Color::Rgb { r: 90, g: 70, b: 150 },
    Color::Rgb { r: 60, g: 110, b: 150 },
];

/// One row of cards.
pub struct Shelf {
    pub id: String,
    pub title: String,
    pub cards: Vec<String>,
}

impl Shelf {
    fn new(id: &str, title: &str, cards: impl IntoIterator<Item = String>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            cards: cards.into_iter().collect(),
        }
    }

    fn content_width(&self) -> u16 {
        let width = self.cards.len() as u32 * CARD_STRIDE as u32;
        width.min(u16::MAX as u32) as u16
    }

    /// Character and card index at content column `column`, row `row`.
    fn cell(&self, column: usize, row: u16) -> Option<(char, usize)> {
        let stride = CARD_STRIDE as usize;
        let index = column / stride;
        let within = column % stride;
        if index >= self.cards.len() || within >= CARD_WIDTH as usize {
            return None;
        }

        // Label on the middle row, centred
        if row != SHELF_HEIGHT / 2 {
            return Some((' ', index));
        }
        let label: Vec<char> = self.cards[index].chars().collect();
        let pad = (CARD_WIDTH as usize).saturating_sub(label.len()) / 2;
        let ch = within
            .checked_sub(pad)
            .and_then(|i| label.get(i).copied())
            .unwrap_or(' ');
        Some((ch, index))
    }
}

pub fn shelves() -> Vec<Shelf> {
    vec![
        Shelf::new(
            "recent",
            "Recently added",
            (1..=24).map(|i| format!("Track {i}")),
        ),
        Shelf::new(
            "albums",
            "Albums",
            [
                "Blue",
                "Kind of Blue",
                "Ok Computer",
                "Discovery",
                "Homogenic",
                "Low",
                "Remain in Light",
                "Vespertine",
                "Moon Safari",
                "Dummy",
                "Loveless",
                "Geogaddi",
            ]
            .map(String::from),
        ),
        Shelf::new(
            "numbers",
            "Numbers",
            (1..=40).map(|i| format!("#{:03}", i * 7)),
        ),
    ]
}

fn shelf_rect(index: usize, width: u16) -> Rect {
    let y = TOP + 1 + index as u16 * (SHELF_HEIGHT + SHELF_SPACING);
    Rect::new(MARGIN, y, width.saturating_sub(MARGIN * 2), SHELF_HEIGHT)
}

/// Build the document: a header plus one slider node per shelf.
pub fn build_document(shelves: &[Shelf], width: u16, config: &SliderConfig) -> Document {
    let mut document =
        Document::new().with(Node::new("header", Rect::new(0, 0, width, TOP), width));
    for (index, shelf) in shelves.iter().enumerate() {
        document.push(
            Node::new(&shelf.id, shelf_rect(index, width), shelf.content_width())
                .class(config.selector.as_str()),
        );
    }
    document
}

/// Resize every node to a new terminal width, keeping scroll offsets in range.
pub fn relayout(document: &mut Document, shelves: &[Shelf], width: u16) {
    if let Some(header) = document.get_mut("header") {
        header.rect.width = width;
        header.content_width = width;
    }
    for (index, shelf) in shelves.iter().enumerate() {
        if let Some(node) = document.get_mut(&shelf.id) {
            node.rect = shelf_rect(index, width);
            let scroll = node.scroll_left();
            node.set_scroll_left(scroll);
        }
    }
}

pub fn draw(
    out: &mut impl Write,
    document: &Document,
    shelves: &[Shelf],
    sliders: &SliderSet,
    config: &SliderConfig,
    width: u16,
) -> io::Result<()> {
    queue!(
        out,
        SetBackgroundColor(BACKGROUND),
        MoveTo(0, 0),
        SetForegroundColor(ACCENT),
        SetAttribute(Attribute::Bold),
        Print(fit("dragscroll demo", width)),
        SetAttribute(Attribute::NormalIntensity),
        MoveTo(0, 1),
        SetForegroundColor(MUTED),
        Print(fit(
            "drag a shelf and let go, wheel/shift+wheel stops momentum, q quits",
            width
        )),
    )?;

    for shelf in shelves {
        let Some(node) = document.get(&shelf.id) else {
            continue;
        };
        let active = node.has_class(&config.active_class);

        let status = sliders
            .get(&shelf.id)
            .map(|s| format!("{:?}  v={:+.2}", s.phase(), s.velocity()))
            .unwrap_or_default();
        queue!(
            out,
            SetBackgroundColor(BACKGROUND),
            MoveTo(node.rect.x, node.rect.y.saturating_sub(1)),
            SetForegroundColor(if active { ACCENT } else { Color::White }),
            Print(fit(
                &format!("{}  [{}]  {}", shelf.title, node.scroll_left().floor(), status),
                node.rect.width
            )),
        )?;

        draw_shelf(out, shelf, node)?;
    }

    Ok(())
}

fn draw_shelf(out: &mut impl Write, shelf: &Shelf, node: &Node) -> io::Result<()> {
    let first = node.scroll_left().floor() as usize;

    for row in 0..node.rect.height {
        queue!(out, MoveTo(node.rect.x, node.rect.y + row))?;
        let mut current: Option<Color> = None;
        for col in 0..node.rect.width as usize {
            let (ch, bg) = match shelf.cell(first + col, row) {
                Some((ch, index)) => (ch, CARD_COLORS[index % CARD_COLORS.len()]),
                None => (' ', BACKGROUND),
            };
            if current != Some(bg) {
                queue!(out, SetBackgroundColor(bg), SetForegroundColor(Color::White))?;
                current = Some(bg);
            }
            queue!(out, Print(ch))?;
        }
    }

    Ok(())
}

/// Pad or cut `text` to exactly `width` columns.
fn fit(text: &str, width: u16) -> String {
    let width = width as usize;
    let mut line: String = text.chars().take(width).collect();
    let len = line.chars().count();
    line.extend(std::iter::repeat(' ').take(width - len));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 3), "abc");
    }

    #[test]
    fn test_document_marks_every_shelf() {
        let shelves = shelves();
        let config = SliderConfig::default();
        let document = build_document(&shelves, 80, &config);

        assert_eq!(document.query_class("list-slider").len(), shelves.len());
        assert!(document.get("header").is_some_and(|n| !n.has_class("list-slider")));
    }

    #[test]
    fn test_relayout_clamps_scroll() {
        let shelves = vec![Shelf::new("s", "S", (0..5).map(|i| i.to_string()))];
        let config = SliderConfig::default();
        let mut document = build_document(&shelves, 40, &config);
        let node = document.get_mut("s").expect("shelf node");
        node.set_scroll_left(node.max_scroll());

        // Wider terminal leaves less to scroll
        relayout(&mut document, &shelves, 70);
        let node = document.get("s").expect("shelf node");
        assert_eq!(node.scroll_left(), node.max_scroll());
        assert_eq!(node.max_scroll(), 14.0);
    }

    #[test]
    fn test_cell_centres_label() {
        let shelf = Shelf::new("s", "S", ["ab".to_string()]);
        assert_eq!(shelf.cell(6, 2), Some(('a', 0)));
        assert_eq!(shelf.cell(7, 2), Some(('b', 0)));
        assert_eq!(shelf.cell(CARD_WIDTH as usize, 2), None);
    }
}
