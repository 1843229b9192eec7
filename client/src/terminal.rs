use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
};

use common::Tile;

pub const WALL_SYMBOL: &str = "██";
pub const PATH_SYMBOL: &str = "░░";
pub const SPACE_SYMBOL: &str = "  ";

pub fn print_maze<W: Write>(out: &mut W, tiles: &[Vec<Tile>]) -> io::Result<()> {
    for row in tiles {
        for tile in row {
            match tile {
                Tile::Wall => queue!(out, PrintStyledContent(WALL_SYMBOL.dark_grey()))?,
                Tile::Path => queue!(out, PrintStyledContent(PATH_SYMBOL.red()))?,
                Tile::Space => queue!(out, Print(SPACE_SYMBOL))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_row_and_one_symbol_per_tile() {
        let tiles = vec![
            vec![Tile::Wall, Tile::Path, Tile::Wall],
            vec![Tile::Wall, Tile::Path, Tile::Space],
        ];
        let mut out = Vec::new();
        print_maze(&mut out, &tiles).expect("writing to a Vec cannot fail");

        let text = String::from_utf8(out).expect("output is UTF-8");
        assert_eq!(text.lines().count(), 2);
        assert_eq!(text.matches(WALL_SYMBOL).count(), 3);
        assert_eq!(text.matches(PATH_SYMBOL).count(), 2);
        assert!(text.ends_with('\n'));
    }
}
