/*!
## Glyph tables

Static data describing the BoxScript alphabet. None of this can be derived;
the geometry of every border glyph and the role of every operator glyph is
simply listed.

*/

/// The glyphs that may appear next to a border glyph, by direction.
/// A direction with `None` is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacency {
    pub north: Option<&'static str>,
    pub south: Option<&'static str>,
    pub east: Option<&'static str>,
    pub west: Option<&'static str>,
}

const fn ns(north: &'static str, south: &'static str) -> Adjacency {
    Adjacency {
        north: Some(north),
        south: Some(south),
        east: None,
        west: None,
    }
}

const fn ew(east: &'static str, west: &'static str) -> Adjacency {
    Adjacency {
        north: None,
        south: None,
        east: Some(east),
        west: Some(west),
    }
}

const fn corner(
    north: Option<&'static str>,
    south: Option<&'static str>,
    east: Option<&'static str>,
    west: Option<&'static str>,
) -> Adjacency {
    Adjacency {
        north,
        south,
        east,
        west,
    }
}

const ADJACENT: &[(char, Adjacency)] = &[
    ('│', ns("│├┤┌┐┞┦┡┩", "│├┤└┘┟┧┢┪")),
    ('┃', ns("┃┣┫┏┓┟┧┢┪", "┃┣┫┗┛┞┦┡┩")),
    ('║', ns("║╠╣╔╗", "║╠╣╚╝")),
    ('─', ew("─┐┘┤┦┧", "─┌└├┞┟")),
    ('━', ew("━┓┛┫┪┩", "━┏┗┣┢┡")),
    ('═', ew("═╗╝╣", "═╔╚╠")),
    ('┌', corner(None, Some("│├└┟┢"), Some("─┐"), None)),
    ('┐', corner(None, Some("│┤┘┧┪"), None, Some("─┌"))),
    ('└', corner(Some("│├┌┞┡"), None, Some("─┘"), None)),
    ('┘', corner(Some("│┤┐┦┩"), None, None, Some("─└"))),
    ('┏', corner(None, Some("┃┣┗┞┡"), Some("━┓"), None)),
    ('┓', corner(None, Some("┃┫┛┦┩"), None, Some("━┏"))),
    ('┗', corner(Some("┃┣┏┟┢"), None, Some("━┛"), None)),
    ('┛', corner(Some("┃┫┓┧┪"), None, None, Some("━┗"))),
    ('╔', corner(None, Some("║╠╚"), Some("═╗"), None)),
    ('╗', corner(None, Some("║╣╝"), None, Some("═╔"))),
    ('╚', corner(Some("║╠╔"), None, Some("═╝"), None)),
    ('╝', corner(Some("║╣╗"), None, None, Some("═╚"))),
    ('├', corner(Some("│├┌┞┡"), Some("│├└┟┢"), Some("─┤"), None)),
    ('┤', corner(Some("│┤┐┦┩"), Some("│┤┘┧┪"), None, Some("─├"))),
    ('┞', corner(Some("┃┣┏┟┢"), Some("│├└┟┢"), Some("─┦"), None)),
    ('┦', corner(Some("┃┫┓┧┪"), Some("│┤┘┧┪"), None, Some("─┞"))),
    ('┟', corner(Some("│├┌┞┡"), Some("┃┣┗┞┡"), Some("─┧"), None)),
    ('┧', corner(Some("│┤┐┦┩"), Some("┃┫┛┦┩"), None, Some("─┟"))),
    ('┣', corner(Some("┃┣┏┟┢"), Some("┃┣┗┞┡"), Some("━┫"), None)),
    ('┫', corner(Some("┃┫┓┧┪"), Some("┃┫┛┦┩"), None, Some("━┣"))),
    ('┡', corner(Some("┃┣┏┟┢"), Some("│├└┟┢"), Some("━┩"), None)),
    ('┩', corner(Some("┃┫┓┧┪"), Some("│┤┘┧┪"), None, Some("━┡"))),
    ('┢', corner(Some("│├┌┞┡"), Some("┃┣┗┞┡"), Some("━┪"), None)),
    ('┪', corner(Some("│┤┐┦┩"), Some("┃┫┛┦┩"), None, Some("━┢"))),
    ('╠', corner(Some("║╠╔"), Some("║╠╚"), Some("═╣"), None)),
    ('╣', corner(Some("║╣╗"), Some("║╣╝"), None, Some("═╠"))),
];

/// Every glyph allowed outside of comments.
pub const CHARACTERS: &str =
    " │┃║─━═┌┐└┘┏┓┗┛╔╗╚╝├┤┞┦┟┧┣┫┡┩┢┪╠╣▄▀◇◈▔░▒▓▚▞▕▏▭▯▖▗▘▝▌▐▧▨▤▥";

pub const BORDERS: &str = "┛┣─├┌│┤┡┏┧┪┟┞━┓┐┢└┦┩┗┫┃┘╔╗╚╝║╠═╣";

pub const CORNERS: &str = "┌┐└┘┏┓┗┛╔╗╚╝";

/// Borders that frame a box edge or divider rather than a plain side wall.
/// A row holding any of these may not hold code outside the frame.
pub const FRAMES: &str = "┛┣─├┌┤┡┏┧┪┟┞━┓┐┢└┦┩┗┫┘";

pub const WALLS: &str = "│┃║";

pub const TOP_LEFT: &str = "┌┏╔";

pub const TOP_RIGHT: &str = "┐┓╗";

pub const THIN_WALLS: &str = "│┃";

pub const COMMENT_WALL: char = '║';

pub const COMMENT_OPEN: &str = "╔╚╠";

pub const COMMENT_FILL: char = '═';

pub const COMMENT_CLOSE: &str = "╗╝╣";

pub const ZERO: char = '▄';

pub const ONE: char = '▀';

pub const FETCH: char = '◇';

/// Placeholder for a neighbour outside of the grid.
pub const ABSENT: char = '\0';

pub fn adjacency(c: char) -> Option<&'static Adjacency> {
    ADJACENT
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, adjacency)| adjacency)
}

pub fn is_bit(c: char) -> bool {
    c == ZERO || c == ONE
}

/// Presentation classes used by highlighters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Border,
    Operator,
    Number,
    Memory,
    Io,
    Paren,
    Comment,
}

pub fn category(c: char) -> Option<Category> {
    match c {
        '─' | '━' | '│' | '┃' | '┌' | '┍' | '┎' | '┏' | '┐' | '┑' | '┒' | '┓' | '└' | '┗'
        | '┘' | '┛' | '├' | '┞' | '┟' | '┡' | '┢' | '┣' | '┤' | '┦' | '┧' | '┩' | '┪'
        | '┫' => Some(Category::Border),
        '▨' | '▧' | '▤' | '▥' | '▔' | '░' | '▒' | '▓' | '▚' | '▞' | '▦' | '▩' | '◈' => {
            Some(Category::Operator)
        }
        '▄' | '▀' | '▣' => Some(Category::Number),
        '◇' => Some(Category::Memory),
        '▭' | '▯' => Some(Category::Io),
        '▕' | '▏' => Some(Category::Paren),
        '║' | '═' | '╔' | '╗' | '╚' | '╝' | '╠' | '╣' => Some(Category::Comment),
        _ => None,
    }
}

/// Keyboard layout of the glyph editor: every glyph has a plain ASCII key.
const KEYS: &[(char, char)] = &[
    ('q', '│'),
    ('a', '┃'),
    ('z', '║'),
    ('w', '─'),
    ('s', '━'),
    ('x', '═'),
    ('e', '┌'),
    ('r', '┐'),
    ('t', '└'),
    ('y', '┘'),
    ('d', '┏'),
    ('f', '┓'),
    ('g', '┗'),
    ('h', '┛'),
    ('c', '╔'),
    ('v', '╗'),
    ('b', '╚'),
    ('n', '╝'),
    ('1', '├'),
    ('2', '┤'),
    ('3', '┞'),
    ('4', '┦'),
    ('5', '┟'),
    ('6', '┧'),
    ('7', '┣'),
    ('8', '┫'),
    ('9', '┡'),
    ('0', '┩'),
    ('-', '┢'),
    ('=', '┪'),
    ('_', '╠'),
    ('+', '╣'),
    ('(', '▄'),
    (')', '▀'),
    ('[', '◇'),
    (']', '◈'),
    ('u', '▔'),
    ('i', '░'),
    ('o', '▒'),
    ('p', '▓'),
    ('j', '▚'),
    ('k', '▞'),
    ('l', '▕'),
    (';', '▏'),
    ('{', '▭'),
    ('}', '▯'),
    ('m', '▖'),
    (',', '▗'),
    ('.', '▘'),
    ('/', '▝'),
    ('\'', '▌'),
    ('"', '▐'),
    ('<', '▧'),
    ('>', '▨'),
    ('?', '▤'),
    ('|', '▥'),
];

pub fn from_key(key: char) -> Option<char> {
    KEYS.iter().find(|(k, _)| *k == key).map(|(_, glyph)| *glyph)
}

pub fn keys() -> impl Iterator<Item = char> {
    KEYS.iter().map(|(key, _)| *key)
}
