use std::fmt;
use std::str::FromStr;

/// The four card colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorParseError {
    #[error("invalid color: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Color {
    type Error = ColorParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Color::Red),
            'G' => Ok(Color::Green),
            'B' => Ok(Color::Blue),
            'Y' => Ok(Color::Yellow),
            _ => Err(ColorParseError::Invalid(c.to_string())),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Color::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "yellow" => Ok(Color::Yellow),
            _ => Err(ColorParseError::Invalid(s.to_string())),
        }
    }
}

/// Number card ranks from One to Nine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl TryFrom<u8> for Rank {
    type Error = RankParseError;
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Rank::One),
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            4 => Ok(Rank::Four),
            5 => Ok(Rank::Five),
            6 => Ok(Rank::Six),
            7 => Ok(Rank::Seven),
            8 => Ok(Rank::Eight),
            9 => Ok(Rank::Nine),
            _ => Err(RankParseError::Invalid(v.to_string())),
        }
    }
}

/// The 14 card-type labels: nine ranks plus the five special types.
///
/// The declaration order is the canonical statistics bucket order; the
/// frequency table is created in this order and ties keep it after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Plus,
    Stop,
    Reverse,
    Taki,
    ChangeColor,
}

impl CardType {
    pub const ALL: [CardType; 14] = [
        CardType::One,
        CardType::Two,
        CardType::Three,
        CardType::Four,
        CardType::Five,
        CardType::Six,
        CardType::Seven,
        CardType::Eight,
        CardType::Nine,
        CardType::Plus,
        CardType::Stop,
        CardType::Reverse,
        CardType::Taki,
        CardType::ChangeColor,
    ];

    /// Position of this type in the canonical bucket order.
    pub const fn index(self) -> usize {
        match self {
            CardType::One => 0,
            CardType::Two => 1,
            CardType::Three => 2,
            CardType::Four => 3,
            CardType::Five => 4,
            CardType::Six => 5,
            CardType::Seven => 6,
            CardType::Eight => 7,
            CardType::Nine => 8,
            CardType::Plus => 9,
            CardType::Stop => 10,
            CardType::Reverse => 11,
            CardType::Taki => 12,
            CardType::ChangeColor => 13,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CardType::One => "1",
            CardType::Two => "2",
            CardType::Three => "3",
            CardType::Four => "4",
            CardType::Five => "5",
            CardType::Six => "6",
            CardType::Seven => "7",
            CardType::Eight => "8",
            CardType::Nine => "9",
            CardType::Plus => "+",
            CardType::Stop => "STOP",
            CardType::Reverse => "<->",
            CardType::Taki => "TAKI",
            CardType::ChangeColor => "COLOR",
        }
    }

    pub fn from_label(label: &str) -> Option<CardType> {
        CardType::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl From<Rank> for CardType {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::One => CardType::One,
            Rank::Two => CardType::Two,
            Rank::Three => CardType::Three,
            Rank::Four => CardType::Four,
            Rank::Five => CardType::Five,
            Rank::Six => CardType::Six,
            Rank::Seven => CardType::Seven,
            Rank::Eight => CardType::Eight,
            Rank::Nine => CardType::Nine,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A TAKI card.
///
/// All variants are immutable once created, except the wild `ChangeColor`
/// card which starts colorless and is resolved to a concrete color exactly
/// once, when it becomes the active top card.
///
/// ```
/// use taki_rs::cards::{Card, CardType, Color, Rank};
///
/// let five = Card::Number(Rank::Five, Color::Red);
/// assert_eq!(five.card_type(), CardType::Five);
/// assert_eq!(five.color(), Some(Color::Red));
/// assert!(Card::ChangeColor(None).color().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Number(Rank, Color),
    Plus(Color),
    Stop(Color),
    Reverse(Color),
    Taki(Color),
    ChangeColor(Option<Color>),
}

impl Card {
    pub const fn color(self) -> Option<Color> {
        match self {
            Card::Number(_, c)
            | Card::Plus(c)
            | Card::Stop(c)
            | Card::Reverse(c)
            | Card::Taki(c) => Some(c),
            Card::ChangeColor(c) => c,
        }
    }

    pub const fn card_type(self) -> CardType {
        match self {
            Card::Number(rank, _) => match rank {
                Rank::One => CardType::One,
                Rank::Two => CardType::Two,
                Rank::Three => CardType::Three,
                Rank::Four => CardType::Four,
                Rank::Five => CardType::Five,
                Rank::Six => CardType::Six,
                Rank::Seven => CardType::Seven,
                Rank::Eight => CardType::Eight,
                Rank::Nine => CardType::Nine,
            },
            Card::Plus(_) => CardType::Plus,
            Card::Stop(_) => CardType::Stop,
            Card::Reverse(_) => CardType::Reverse,
            Card::Taki(_) => CardType::Taki,
            Card::ChangeColor(_) => CardType::ChangeColor,
        }
    }

    /// Whether this is the wild color-change card.
    pub const fn is_wild(self) -> bool {
        matches!(self, Card::ChangeColor(_))
    }

    /// Rebuild a card from a type label and an optional color.
    ///
    /// Colored variants require a color; `ChangeColor` accepts either.
    pub fn from_parts(card_type: CardType, color: Option<Color>) -> Option<Card> {
        match (card_type, color) {
            (CardType::ChangeColor, c) => Some(Card::ChangeColor(c)),
            (CardType::Plus, Some(c)) => Some(Card::Plus(c)),
            (CardType::Stop, Some(c)) => Some(Card::Stop(c)),
            (CardType::Reverse, Some(c)) => Some(Card::Reverse(c)),
            (CardType::Taki, Some(c)) => Some(Card::Taki(c)),
            (t, Some(c)) => {
                let rank = Rank::try_from(t.index() as u8 + 1).ok()?;
                Some(Card::Number(rank, c))
            }
            (_, None) => None,
        }
    }

    /// Legality of placing `self` on `top`: type labels match, colors match,
    /// or `self` is the wild card.
    ///
    /// ```
    /// use taki_rs::cards::{Card, Color, Rank};
    ///
    /// let top = Card::Number(Rank::Five, Color::Red);
    /// assert!(Card::Number(Rank::Five, Color::Blue).can_play_on(top));
    /// assert!(Card::Stop(Color::Red).can_play_on(top));
    /// assert!(Card::ChangeColor(None).can_play_on(top));
    /// assert!(!Card::Stop(Color::Blue).can_play_on(top));
    /// ```
    pub fn can_play_on(self, top: Card) -> bool {
        if self.is_wild() {
            return true;
        }
        if self.card_type() == top.card_type() {
            return true;
        }
        match (self.color(), top.color()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Resolve a colorless wild card to a concrete color. No effect on any
    /// other card or on an already-resolved wild.
    pub fn resolve_color(&mut self, color: Color) {
        if let Card::ChangeColor(slot @ None) = self {
            *slot = Some(color);
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.card_type().label())?;
        if let Some(c) = self.color() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parse the compact `Display` form: a type label optionally followed by
    /// a color letter, e.g. `5R`, `+G`, `STOPB`, `COLOR`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() >= 2 {
            let (head, tail) = t.split_at(t.len() - 1);
            let color = tail.chars().next().and_then(|c| Color::try_from(c).ok());
            if let (Some(card_type), Some(color)) = (CardType::from_label(head), color) {
                if let Some(card) = Card::from_parts(card_type, Some(color)) {
                    return Ok(card);
                }
            }
        }
        if CardType::from_label(t) == Some(CardType::ChangeColor) {
            return Ok(Card::ChangeColor(None));
        }
        Err(CardParseError::Invalid(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_index_matches_canonical_order() {
        for (i, t) in CardType::ALL.into_iter().enumerate() {
            assert_eq!(t.index(), i);
        }
        assert_eq!(CardType::from(Rank::Seven).index(), 6);
    }

    #[test]
    fn labels_round_trip() {
        for t in CardType::ALL {
            assert_eq!(CardType::from_label(t.label()), Some(t));
        }
        assert_eq!(CardType::from_label("JOKER"), None);
    }

    #[test]
    fn wild_card_is_colorless_until_resolved() {
        let mut wild = Card::ChangeColor(None);
        assert_eq!(wild.color(), None);
        wild.resolve_color(Color::Blue);
        assert_eq!(wild.color(), Some(Color::Blue));
        // A second resolution is a no-op.
        wild.resolve_color(Color::Red);
        assert_eq!(wild.color(), Some(Color::Blue));
    }

    #[test]
    fn resolve_color_ignores_colored_cards() {
        let mut card = Card::Stop(Color::Green);
        card.resolve_color(Color::Red);
        assert_eq!(card, Card::Stop(Color::Green));
    }

    #[test]
    fn legality_covers_type_color_and_wild() {
        let top = Card::Number(Rank::Three, Color::Yellow);
        assert!(Card::Number(Rank::Three, Color::Red).can_play_on(top));
        assert!(Card::Taki(Color::Yellow).can_play_on(top));
        assert!(Card::ChangeColor(None).can_play_on(top));
        assert!(!Card::Number(Rank::Four, Color::Red).can_play_on(top));
        assert!(!Card::Plus(Color::Green).can_play_on(top));
    }

    #[test]
    fn display_and_from_str() {
        let five = Card::Number(Rank::Five, Color::Red);
        assert_eq!(five.to_string(), "5R");
        assert_eq!("5R".parse::<Card>().unwrap(), five);
        assert_eq!("STOPB".parse::<Card>().unwrap(), Card::Stop(Color::Blue));
        assert_eq!("COLOR".parse::<Card>().unwrap(), Card::ChangeColor(None));
        assert_eq!("COLORG".parse::<Card>().unwrap(), Card::ChangeColor(Some(Color::Green)));
        assert!("5X".parse::<Card>().is_err());
        assert!("X".parse::<Card>().is_err());
    }

    #[test]
    fn color_parsing() {
        assert_eq!("yellow".parse::<Color>().unwrap(), Color::Yellow);
        assert_eq!(Color::try_from('g').unwrap(), Color::Green);
        assert!("purple".parse::<Color>().is_err());
    }
}
