//! Board configuration and the arrangement codec
//!
//! A board is an ordered color palette plus a peg count. Each arrangement maps to
//! a single integer in `[0, colors^pegs)` using mixed-radix encoding, where the
//! first peg is the most significant digit:
//!
//! `index = Σ digit[i] × colors^(pegs - 1 - i)`
//!
//! Ascending index order is therefore lexicographic order over palette positions.

use super::arrangement::{Arrangement, CodecError, Pegs};
use thiserror::Error;

/// Largest palette supported by the fixed-size scorer tallies
pub const MAX_COLORS: usize = 16;

/// Largest peg count supported by `Pegs`
pub const MAX_PEGS: usize = 8;

/// Classic palette: white, red, orange, yellow, green, purple
pub const DEFAULT_PALETTE: &str = "WROYGP";

/// Classic peg count
pub const DEFAULT_PEGS: usize = 4;

/// Error type for invalid board configurations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("palette color '{0}' appears more than once")]
    DuplicateColor(char),
    #[error("palette has {0} colors, at most {max} are supported", max = MAX_COLORS)]
    TooManyColors(usize),
    #[error("peg count must be between 1 and {max}, got {0}", max = MAX_PEGS)]
    InvalidPegCount(usize),
    #[error("{colors} colors over {pegs} pegs does not fit the arrangement index")]
    SpaceTooLarge { colors: usize, pegs: usize },
}

/// Palette and peg count for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    palette: Vec<char>,
    pegs: usize,
    space_size: u32,
}

impl BoardConfig {
    /// Create a board from a palette string and a peg count
    ///
    /// Each character of `palette` is one color; its position is the color's
    /// digit value.
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - The palette is empty, has duplicates, or has more than 16 colors
    /// - The peg count is 0 or more than 8
    /// - `colors^pegs` does not fit in a `u32`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::BoardConfig;
    ///
    /// let board = BoardConfig::new("ABC", 3).unwrap();
    /// assert_eq!(board.space_size(), 27);
    ///
    /// assert!(BoardConfig::new("AAB", 3).is_err());
    /// assert!(BoardConfig::new("ABC", 0).is_err());
    /// ```
    pub fn new(palette: &str, pegs: usize) -> Result<Self, BoardError> {
        let palette: Vec<char> = palette.chars().collect();

        if palette.is_empty() {
            return Err(BoardError::EmptyPalette);
        }
        if palette.len() > MAX_COLORS {
            return Err(BoardError::TooManyColors(palette.len()));
        }
        if let Some(&duplicate) = palette
            .iter()
            .enumerate()
            .find_map(|(i, c)| palette[..i].contains(c).then_some(c))
        {
            return Err(BoardError::DuplicateColor(duplicate));
        }
        if pegs == 0 || pegs > MAX_PEGS {
            return Err(BoardError::InvalidPegCount(pegs));
        }

        let space_size = (palette.len() as u32)
            .checked_pow(pegs as u32)
            .ok_or(BoardError::SpaceTooLarge {
                colors: palette.len(),
                pegs,
            })?;

        Ok(Self {
            palette,
            pegs,
            space_size,
        })
    }

    /// The ordered palette symbols
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &[char] {
        &self.palette
    }

    /// Number of colors in the palette
    #[inline]
    #[must_use]
    pub fn colors(&self) -> usize {
        self.palette.len()
    }

    /// Number of pegs per arrangement
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> usize {
        self.pegs
    }

    /// Total number of arrangements (`colors^pegs`)
    #[inline]
    #[must_use]
    pub const fn space_size(&self) -> u32 {
        self.space_size
    }

    /// Every arrangement on the board, in ascending index order
    pub fn arrangements(&self) -> impl Iterator<Item = Arrangement> + use<> {
        (0..self.space_size).map(Arrangement::new)
    }

    /// Check whether an arrangement index lies on this board
    #[inline]
    #[must_use]
    pub const fn contains(&self, arrangement: Arrangement) -> bool {
        arrangement.index() < self.space_size
    }

    /// Range-checked conversion from an integer index
    ///
    /// # Errors
    /// Returns `CodecError::OutOfRange` if `index >= space_size()`.
    pub fn arrangement(&self, index: u32) -> Result<Arrangement, CodecError> {
        if index < self.space_size {
            Ok(Arrangement::new(index))
        } else {
            Err(CodecError::OutOfRange {
                value: index,
                size: self.space_size,
            })
        }
    }

    /// Encode a sequence of palette symbols
    ///
    /// # Errors
    /// Returns `CodecError` if the length differs from the peg count or a
    /// symbol is not in the palette.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::BoardConfig;
    ///
    /// let board = BoardConfig::default();
    /// let code = board.encode(&['W', 'W', 'R', 'R']).unwrap();
    /// assert_eq!(code.index(), 7); // 0×216 + 0×36 + 1×6 + 1
    /// ```
    pub fn encode(&self, colors: &[char]) -> Result<Arrangement, CodecError> {
        if colors.len() != self.pegs {
            return Err(CodecError::InvalidLength {
                expected: self.pegs,
                got: colors.len(),
            });
        }

        let radix = self.colors() as u32;
        let mut index = 0u32;
        for &symbol in colors {
            index = index * radix + u32::from(self.digit_of(symbol)?);
        }

        Ok(Arrangement::new(index))
    }

    /// Decode an integer index into palette symbols
    ///
    /// # Errors
    /// Returns `CodecError::OutOfRange` if `index >= space_size()`.
    pub fn decode(&self, index: u32) -> Result<Vec<char>, CodecError> {
        let arrangement = self.arrangement(index)?;
        Ok(self.symbols(arrangement).collect())
    }

    /// Parse the text form of an arrangement (first peg first)
    ///
    /// Symbols are matched exactly against the palette, so
    /// `render(parse(s)) == s` for every valid string.
    ///
    /// # Errors
    /// Returns `CodecError` for a wrong length or unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::BoardConfig;
    ///
    /// let board = BoardConfig::default();
    /// let code = board.parse("OOGP").unwrap();
    /// assert_eq!(board.render(code), "OOGP");
    ///
    /// assert!(board.parse("OOG").is_err());
    /// assert!(board.parse("OOGX").is_err());
    /// ```
    pub fn parse(&self, text: &str) -> Result<Arrangement, CodecError> {
        let symbols: Vec<char> = text.chars().collect();
        self.encode(&symbols)
    }

    /// Render an arrangement as palette text
    #[must_use]
    pub fn render(&self, arrangement: Arrangement) -> String {
        self.symbols(arrangement).collect()
    }

    /// Split an arrangement into its per-position digits
    #[must_use]
    pub fn pegs_of(&self, arrangement: Arrangement) -> Pegs {
        let radix = self.colors() as u32;
        let mut digits = [0u8; MAX_PEGS];
        let mut rest = arrangement.index();

        for slot in digits[..self.pegs].iter_mut().rev() {
            *slot = (rest % radix) as u8;
            rest /= radix;
        }

        Pegs::new(digits, self.pegs)
    }

    fn symbols(&self, arrangement: Arrangement) -> impl Iterator<Item = char> + '_ {
        let pegs = self.pegs_of(arrangement);
        (0..pegs.len()).map(move |i| self.palette[usize::from(pegs[i])])
    }

    fn digit_of(&self, symbol: char) -> Result<u8, CodecError> {
        self.palette
            .iter()
            .position(|&c| c == symbol)
            .map(|digit| digit as u8)
            .ok_or_else(|| CodecError::UnknownColor {
                symbol,
                palette: self.palette.iter().collect(),
            })
    }
}

impl Default for BoardConfig {
    /// The classic 4-peg, 6-color board (`WROYGP`)
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.chars().collect(),
            pegs: DEFAULT_PEGS,
            space_size: 6u32.pow(DEFAULT_PEGS as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_classic() {
        let board = BoardConfig::default();
        assert_eq!(board.palette(), &['W', 'R', 'O', 'Y', 'G', 'P']);
        assert_eq!(board.colors(), 6);
        assert_eq!(board.pegs(), 4);
        assert_eq!(board.space_size(), 1296);
        assert_eq!(board, BoardConfig::new(DEFAULT_PALETTE, DEFAULT_PEGS).unwrap());
    }

    #[test]
    fn board_rejects_bad_configurations() {
        assert_eq!(BoardConfig::new("", 4), Err(BoardError::EmptyPalette));
        assert_eq!(
            BoardConfig::new("WRW", 4),
            Err(BoardError::DuplicateColor('W'))
        );
        assert_eq!(
            BoardConfig::new("ABCDEFGHIJKLMNOPQ", 2),
            Err(BoardError::TooManyColors(17))
        );
        assert_eq!(BoardConfig::new("WR", 0), Err(BoardError::InvalidPegCount(0)));
        assert_eq!(BoardConfig::new("WR", 9), Err(BoardError::InvalidPegCount(9)));
        assert!(matches!(
            BoardConfig::new("ABCDEFGHIJKLMNOP", 8),
            Err(BoardError::SpaceTooLarge { colors: 16, pegs: 8 })
        ));
    }

    #[test]
    fn encode_decode_round_trip_every_index() {
        let board = BoardConfig::default();
        for index in 0..board.space_size() {
            let symbols = board.decode(index).unwrap();
            assert_eq!(symbols.len(), 4);
            assert_eq!(board.encode(&symbols).unwrap().index(), index);
        }
    }

    #[test]
    fn parse_render_round_trip_every_string() {
        let board = BoardConfig::default();
        let palette = board.palette().to_vec();
        for &a in &palette {
            for &b in &palette {
                for &c in &palette {
                    for &d in &palette {
                        let text: String = [a, b, c, d].iter().collect();
                        assert_eq!(board.render(board.parse(&text).unwrap()), text);
                    }
                }
            }
        }
    }

    #[test]
    fn first_peg_is_most_significant() {
        let board = BoardConfig::default();
        assert_eq!(board.parse("WWWW").unwrap().index(), 0);
        assert_eq!(board.parse("WWWR").unwrap().index(), 1);
        assert_eq!(board.parse("RWWW").unwrap().index(), 216);
        assert_eq!(board.parse("PPPP").unwrap().index(), 1295);
        assert_eq!(board.decode(1).unwrap(), vec!['W', 'W', 'W', 'R']);
    }

    #[test]
    fn ascending_index_is_lexicographic_by_palette() {
        let board = BoardConfig::default();
        let rendered: Vec<String> = board.arrangements().take(7).map(|a| board.render(a)).collect();
        assert_eq!(
            rendered,
            ["WWWW", "WWWR", "WWWO", "WWWY", "WWWG", "WWWP", "WWRW"]
        );
    }

    #[test]
    fn encode_rejects_wrong_length() {
        let board = BoardConfig::default();
        assert_eq!(
            board.encode(&['W', 'R', 'O']),
            Err(CodecError::InvalidLength {
                expected: 4,
                got: 3
            })
        );
        assert!(matches!(
            board.parse("WROYG"),
            Err(CodecError::InvalidLength {
                expected: 4,
                got: 5
            })
        ));
        assert!(board.parse("").is_err());
    }

    #[test]
    fn encode_rejects_unknown_symbols() {
        let board = BoardConfig::default();
        assert!(matches!(
            board.parse("WRBY"),
            Err(CodecError::UnknownColor { symbol: 'B', .. })
        ));
        // Case-sensitive
        assert!(matches!(
            board.parse("wroy"),
            Err(CodecError::UnknownColor { symbol: 'w', .. })
        ));
    }

    #[test]
    fn decode_rejects_out_of_range() {
        let board = BoardConfig::default();
        assert_eq!(
            board.decode(1296),
            Err(CodecError::OutOfRange {
                value: 1296,
                size: 1296
            })
        );
        assert!(board.arrangement(u32::MAX).is_err());
        assert!(board.arrangement(1295).is_ok());
    }

    #[test]
    fn custom_board_codec() {
        let board = BoardConfig::new("abcd", 3).unwrap();
        assert_eq!(board.space_size(), 64);
        assert_eq!(board.parse("dcb").unwrap().index(), 3 * 16 + 2 * 4 + 1);
        assert_eq!(board.render(board.arrangement(63).unwrap()), "ddd");
        assert!(!board.contains(BoardConfig::default().parse("PPPP").unwrap()));
    }

    #[test]
    fn pegs_of_matches_decode() {
        let board = BoardConfig::default();
        let code = board.parse("YWPW").unwrap();
        assert_eq!(board.pegs_of(code).as_slice(), &[3, 0, 5, 0]);
    }
}
