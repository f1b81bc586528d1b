use rand::Rng;

/// One of the fixed pastel colors an entry or preset can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swatch {
    Pink,
    Purple,
    Indigo,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Teal,
    Cyan,
}

pub const PALETTE: [Swatch; 10] = [
    Swatch::Pink,
    Swatch::Purple,
    Swatch::Indigo,
    Swatch::Blue,
    Swatch::Green,
    Swatch::Yellow,
    Swatch::Orange,
    Swatch::Red,
    Swatch::Teal,
    Swatch::Cyan,
];

impl Swatch {
    /// Picks a swatch uniformly from the palette
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PALETTE[rng.gen_range(0..PALETTE.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Swatch::Pink => "pink",
            Swatch::Purple => "purple",
            Swatch::Indigo => "indigo",
            Swatch::Blue => "blue",
            Swatch::Green => "green",
            Swatch::Yellow => "yellow",
            Swatch::Orange => "orange",
            Swatch::Red => "red",
            Swatch::Teal => "teal",
            Swatch::Cyan => "cyan",
        }
    }

    /// Stable style token, e.g. "bg-green-200"
    pub fn token(&self) -> String {
        format!("bg-{}-200", self.name())
    }
}
