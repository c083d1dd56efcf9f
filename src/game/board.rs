use super::mask::{is_maskable, MaskGlyphs};
use super::resolver::{self, Inflection, Match};
use super::tokenizer::{tokenize, Token};
use crate::models::Article;

/// One character of the combined title + extract text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub revealed: bool,
}

impl Cell {
    pub fn is_maskable(&self) -> bool {
        is_maskable(self.ch)
    }
}

/// The playing surface for one article.
///
/// Reveals only ever flip `revealed` on cells, so the board keeps the same
/// length as the source text no matter how many guesses land.
#[derive(Debug, Clone)]
pub struct Board {
    article: Article,
    cells: Vec<Cell>,
    tokens: Vec<Token>,
    title_len: usize,
    glyphs: MaskGlyphs,
}

impl Board {
    pub fn new(article: Article, glyphs: MaskGlyphs) -> Self {
        let text = article.full_text();
        let cells = text
            .chars()
            .map(|ch| Cell {
                ch,
                revealed: !is_maskable(ch),
            })
            .collect();
        let tokens = tokenize(&text);
        let title_len = article.title.chars().count();

        Self {
            article,
            cells,
            tokens,
            title_len,
            glyphs,
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn glyphs(&self) -> MaskGlyphs {
        self.glyphs
    }

    pub fn title_cells(&self) -> &[Cell] {
        &self.cells[..self.title_len]
    }

    /// Cells after the title and its separating space.
    pub fn extract_cells(&self) -> &[Cell] {
        let start = (self.title_len + 1).min(self.cells.len());
        &self.cells[start..]
    }

    pub fn display_char(&self, cell: &Cell) -> char {
        if cell.revealed {
            cell.ch
        } else {
            self.glyphs.glyph_for(cell.ch).unwrap_or(cell.ch)
        }
    }

    #[cfg(test)]
    pub fn masked_text(&self) -> String {
        self.cells.iter().map(|c| self.display_char(c)).collect()
    }

    pub fn find(&self, guess: &str, inflection: &dyn Inflection) -> Option<Match> {
        resolver::resolve(guess, &self.tokens, inflection)
    }

    /// Unmask every occurrence in `found`. Returns how many cells changed.
    pub fn reveal(&mut self, found: &Match) -> usize {
        let mut changed = 0;
        for span in &found.spans {
            for cell in &mut self.cells[span.clone()] {
                if !cell.revealed {
                    cell.revealed = true;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Unmask every cell whose lowercase form is `letter`.
    pub fn reveal_letter(&mut self, letter: char) -> usize {
        let mut changed = 0;
        for cell in &mut self.cells {
            if !cell.revealed && cell.ch.to_lowercase().eq(letter.to_lowercase()) {
                cell.revealed = true;
                changed += 1;
            }
        }
        changed
    }

    pub fn is_title_solved(&self) -> bool {
        self.title_cells().iter().all(|c| c.revealed)
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.revealed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::mask::mask;
    use crate::game::resolver::FrenchPlural;

    fn board(title: &str, extract: &str) -> Board {
        Board::new(Article::new(title, extract, ""), MaskGlyphs::default())
    }

    #[test]
    fn fresh_board_is_fully_masked() {
        let b = board("Paris", "Paris est la capitale de la France.");
        let text = b.article().full_text();
        assert_eq!(b.masked_text(), mask(&text, MaskGlyphs::default()));
        assert_eq!(b.masked_text().chars().count(), text.chars().count());
    }

    #[test]
    fn reveal_restores_original_casing_everywhere() {
        let mut b = board("Paris", "Paris est la capitale de la France.");
        let found = b.find("PARIS", &FrenchPlural).unwrap();
        assert_eq!(b.reveal(&found), 10);
        assert_eq!(
            b.masked_text(),
            "Paris Paris ■■■ ■■ ■■■■■■■■ ■■ ■■ ■■■■■■."
        );
        assert!(b.is_title_solved());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut b = board("Lyon", "Lyon.");
        let found = b.find("lyon", &FrenchPlural).unwrap();
        b.reveal(&found);
        let before = b.masked_text();
        assert_eq!(b.reveal(&found), 0);
        assert_eq!(b.masked_text(), before);
    }

    #[test]
    fn repeated_reveals_do_not_drift() {
        let mut b = board("La Loire", "La Loire est un fleuve, la Loire coule.");
        for guess in ["loire", "la", "fleuve", "coule"] {
            let found = b.find(guess, &FrenchPlural).unwrap();
            b.reveal(&found);
        }
        assert_eq!(
            b.masked_text(),
            "La Loire La Loire ■■■ ■■ fleuve, la Loire coule."
        );
    }

    #[test]
    fn title_and_extract_split_on_separator() {
        let b = board("Nîmes", "Ville.");
        assert_eq!(b.title_cells().len(), 5);
        assert_eq!(b.extract_cells().len(), 6);
    }

    #[test]
    fn reveal_letter_is_case_insensitive() {
        let mut b = board("Orange", "Une orange.");
        assert_eq!(b.reveal_letter('o'), 2);
        assert_eq!(b.masked_text(), "O■■■■■ ■■■ o■■■■■.");
    }

    #[test]
    fn digits_reveal_like_words() {
        let mut b = board("1789", "En 1789, la Révolution.");
        let found = b.find("1789", &FrenchPlural).unwrap();
        b.reveal(&found);
        assert_eq!(b.masked_text(), "1789 ■■ 1789, ■■ ■■■■■■■■■■.");
    }
}
