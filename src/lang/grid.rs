use super::glyph::{self, ABSENT, COMMENT_WALL};
use super::Error;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Check that the source draws only closed, continuous boxes and that
/// no code sits outside of them. Only the first problem is reported.
pub fn validate(text: &str) -> Result<()> {
    let grid = Grid::new(text);
    let result = grid.continuity().and_then(|_| {
        for (row, chars) in grid.rows().iter().enumerate() {
            check_row(row, chars)?;
        }
        Ok(())
    });
    if let Err(error) = &result {
        debug!("rejected source: {}", error);
    }
    result
}

/// ## Source text as rows of glyphs
///
/// Rows may be ragged. Anything looked up past the end of a row, or above
/// the first or below the last row, reads as [`ABSENT`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors {
    pub north: char,
    pub south: char,
    pub east: char,
    pub west: char,
}

impl Grid {
    pub fn new(text: &str) -> Grid {
        Grid {
            rows: text.lines().map(|line| line.chars().collect()).collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> char {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(ABSENT)
    }

    pub fn neighbors(&self, row: usize, col: usize) -> Neighbors {
        Neighbors {
            north: match row.checked_sub(1) {
                Some(r) => self.get(r, col),
                None => ABSENT,
            },
            south: self.get(row + 1, col),
            east: self.get(row, col + 1),
            west: match col.checked_sub(1) {
                Some(c) => self.get(row, c),
                None => ABSENT,
            },
        }
    }

    fn continuity(&self) -> Result<()> {
        for (row, chars) in self.rows.iter().enumerate() {
            for (col, &c) in chars.iter().enumerate() {
                if in_remark(chars, col) {
                    continue;
                }
                let adjacency = match glyph::adjacency(c) {
                    Some(adjacency) => adjacency,
                    None => continue,
                };
                let near = self.neighbors(row, col);
                let directions = [
                    (adjacency.north, near.north),
                    (adjacency.south, near.south),
                    (adjacency.east, near.east),
                    (adjacency.west, near.west),
                ];
                for (expected, found) in directions.iter() {
                    if let Some(expected) = expected {
                        if !expected.contains(*found) {
                            return Err(error!(DiscontinuousBox, row));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn in_remark(chars: &[char], col: usize) -> bool {
    chars[..col].contains(&COMMENT_WALL) && chars[col + 1..].contains(&COMMENT_WALL)
}

/// Leftmost opener and rightmost closer after it, as a greedy `[open].*[close]`.
fn span(chars: &[char], open: &str, close: &str) -> Option<(usize, usize)> {
    let start = chars.iter().position(|c| open.contains(*c))?;
    let end = chars.iter().rposition(|c| close.contains(*c))?;
    if end > start {
        Some((start, end))
    } else {
        None
    }
}

fn count(chars: &[char], set: &str) -> usize {
    chars.iter().filter(|c| set.contains(**c)).count()
}

/// Runs of wall glyphs, split on runs of anything else. Like a regex split,
/// a leading or trailing gap yields an empty run.
fn wall_runs(chars: &[char]) -> Vec<Vec<char>> {
    let mut runs: Vec<Vec<char>> = vec![vec![]];
    let mut in_gap = false;
    for &c in chars {
        if glyph::WALLS.contains(c) {
            if in_gap {
                runs.push(vec![]);
                in_gap = false;
            }
            if let Some(run) = runs.last_mut() {
                run.push(c);
            }
        } else {
            in_gap = true;
        }
    }
    if in_gap {
        runs.push(vec![]);
    }
    runs
}

fn reversed(run: &[char]) -> Vec<char> {
    run.iter().rev().copied().collect()
}

fn check_row(row: usize, chars: &[char]) -> Result<()> {
    let mut strip_c = chars.to_vec();
    if let Some((start, end)) = span(chars, "║", "║") {
        for c in &mut strip_c[start..=end] {
            *c = ' ';
        }
    }

    if let Some(c) = strip_c.iter().find(|c| !glyph::CHARACTERS.contains(**c)) {
        return Err(error!(InvalidCharacter, row; &c.to_string()));
    }

    let corners = count(&strip_c, glyph::CORNERS);
    if corners != 0 && corners != 2 {
        return Err(error!(DuplicateBox, row));
    }

    let strip_w: Vec<char> = strip_c.into_iter().filter(|c| !c.is_whitespace()).collect();

    if strip_w
        .iter()
        .any(|c| glyph::TOP_LEFT.contains(*c) || glyph::TOP_RIGHT.contains(*c))
    {
        match span(&strip_w, glyph::TOP_LEFT, glyph::TOP_RIGHT) {
            Some((start, end)) => {
                let left = count(&strip_w[..start], glyph::THIN_WALLS);
                let right = count(&strip_w[end + 1..], glyph::THIN_WALLS);
                if left != right {
                    return Err(error!(DuplicateBox, row));
                }
            }
            None => return Err(error!(DuplicateBox, row)),
        }
    }

    if !strip_w.is_empty() {
        let runs = wall_runs(&strip_w);
        let matched = if runs.len() != 2 {
            runs[0] == reversed(&runs[0])
        } else {
            runs[0] == reversed(&runs[1])
        };
        if !matched {
            return Err(error!(UnmatchedWall, row));
        }
    }

    let mut code = strip_w;
    if let Some((start, end)) = span(&code, "╔╚║╠", "╗╝║╣") {
        code.drain(start..=end);
    }
    let borders = count(&code, glyph::BORDERS);
    let mut statements = 0;
    let mut in_statement = false;
    for c in &code {
        let is_code = !glyph::BORDERS.contains(*c);
        if is_code && !in_statement {
            statements += 1;
        }
        in_statement = is_code;
    }
    if !code.is_empty() && borders == 0 {
        return Err(error!(CodeOutsideBox, row));
    }
    let framed = count(&code, glyph::FRAMES) > 0;
    if (framed && statements > 0) || statements > 1 {
        return Err(error!(CodeOutsideBox, row));
    }
    Ok(())
}
