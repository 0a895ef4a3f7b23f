//! Green rain shown while the `matrix` easter egg is active.

use rand::Rng;

pub const MATRIX_CHARS: &str = "ﾊﾐﾋｰｳｼﾅﾓﾆｻﾜﾂｵﾘｱﾎﾃﾏｹﾒｴｶｷﾑﾕﾗｾﾈｽﾀﾇﾍ01234789";
pub const RAIN_COLUMNS: usize = 50;
pub const RAIN_LENGTH: usize = 20;

/// One falling column: its glyphs top to bottom and its head offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RainColumn {
    pub glyphs: Vec<char>,
    pub offset: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixRain {
    columns: Vec<RainColumn>,
}

impl MatrixRain {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let alphabet: Vec<char> = MATRIX_CHARS.chars().collect();
        let columns = (0..RAIN_COLUMNS)
            .map(|_| RainColumn {
                glyphs: (0..RAIN_LENGTH)
                    .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                    .collect(),
                offset: rng.gen_range(0..RAIN_LENGTH as u16),
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[RainColumn] {
        &self.columns
    }

    /// Move every column one row down, wrapping after a full screen.
    pub fn advance(&mut self, screen_rows: u16) {
        let wrap = screen_rows.saturating_add(RAIN_LENGTH as u16).max(1);
        for column in &mut self.columns {
            column.offset = (column.offset + 1) % wrap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rain_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let rain = MatrixRain::generate(&mut rng);
        assert_eq!(rain.columns().len(), RAIN_COLUMNS);
        for column in rain.columns() {
            assert_eq!(column.glyphs.len(), RAIN_LENGTH);
            assert!(column.glyphs.iter().all(|c| MATRIX_CHARS.contains(*c)));
        }
    }

    #[test]
    fn test_advance_wraps() {
        let mut rain = MatrixRain {
            columns: vec![RainColumn {
                glyphs: vec!['0'; RAIN_LENGTH],
                offset: 29,
            }],
        };
        rain.advance(10);
        assert_eq!(rain.columns()[0].offset, 0);
    }
}
