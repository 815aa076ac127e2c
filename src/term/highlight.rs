use crate::lang::glyph::{self, Category, COMMENT_WALL, FETCH};
use ansi_term::{Colour, Style};

fn style(category: Category) -> Style {
    match category {
        Category::Border => Style::new().fg(Colour::RGB(0xff, 0xff, 0xff)),
        Category::Operator => Style::new().fg(Colour::RGB(0xed, 0xb9, 0xb6)),
        Category::Number => Style::new().fg(Colour::RGB(0xd5, 0xb6, 0xed)),
        Category::Memory => Style::new().fg(Colour::RGB(0xb6, 0xed, 0xb9)),
        Category::Io => Style::new().fg(Colour::RGB(0xb6, 0xea, 0xed)),
        Category::Paren => Style::new().fg(Colour::RGB(0xb9, 0xb6, 0xed)),
        Category::Comment => Style::new().fg(Colour::RGB(0x72, 0x76, 0x7d)).italic(),
    }
}

/// Colour a listing by glyph category.
pub fn highlight(source: &str) -> String {
    let mut out = String::new();
    for line in source.lines() {
        let chars: Vec<char> = line.chars().collect();
        let categories = classify(&chars);
        let mut start = 0;
        while start < chars.len() {
            let category = categories[start];
            let mut end = start + 1;
            while end < chars.len() && categories[end] == category {
                end += 1;
            }
            let run: String = chars[start..end].iter().collect();
            match category {
                Some(category) => out.push_str(&style(category).paint(run).to_string()),
                None => out.push_str(&run),
            }
            start = end;
        }
        out.push('\n');
    }
    out
}

/// Category of every glyph on a row. Everything from the first to the
/// last `║` is comment, and `◇` colours the number it reads.
fn classify(chars: &[char]) -> Vec<Option<Category>> {
    let mut categories: Vec<Option<Category>> =
        chars.iter().map(|c| glyph::category(*c)).collect();
    let first = chars.iter().position(|c| *c == COMMENT_WALL);
    let last = chars.iter().rposition(|c| *c == COMMENT_WALL);
    if let (Some(first), Some(last)) = (first, last) {
        for category in &mut categories[first..=last] {
            *category = Some(Category::Comment);
        }
    }
    let mut i = 0;
    while i < chars.len() {
        i += 1;
        if chars[i - 1] != FETCH || categories[i - 1] == Some(Category::Comment) {
            continue;
        }
        categories[i - 1] = Some(Category::Memory);
        while i < chars.len() && glyph::is_bit(chars[i]) {
            categories[i] = Some(Category::Memory);
            i += 1;
        }
    }
    categories
}
