use rand::Rng;

/// How a number typed into the "Go to card" box maps onto an index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardNumbering {
    /// Input `n` selects index `n` and the counter shows the raw index.
    #[default]
    Legacy,
    /// Input `n` selects index `n - 1` and the counter shows `index + 1`.
    OneBased,
}

impl CardNumbering {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(Self::Legacy),
            "one-based" | "onebased" | "1" => Some(Self::OneBased),
            _ => None,
        }
    }

    pub fn display_number(self, index: usize) -> usize {
        match self {
            Self::Legacy => index,
            Self::OneBased => index + 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoToError {
    #[error("Please enter a number between 1 and {max}")]
    OutOfRange { max: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_index: usize,
    deck_size: usize,
}

impl NavigationState {
    pub fn new(deck_size: usize) -> Self {
        Self {
            current_index: 0,
            deck_size,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn is_empty(&self) -> bool {
        self.deck_size == 0
    }

    pub fn last_index(&self) -> Option<usize> {
        self.deck_size.checked_sub(1)
    }

    pub fn at_start(&self) -> bool {
        self.is_empty() || self.current_index == 0
    }

    pub fn at_end(&self) -> bool {
        self.last_index()
            .map_or(true, |last| self.current_index >= last)
    }

    pub fn prev(self) -> Self {
        if self.at_start() {
            return self;
        }
        Self {
            current_index: self.current_index - 1,
            ..self
        }
    }

    pub fn next(self) -> Self {
        if self.at_end() {
            return self;
        }
        Self {
            current_index: self.current_index + 1,
            ..self
        }
    }

    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Prev => self.prev(),
            Direction::Next => self.next(),
        }
    }

    /// Jumps to a user-entered card number. The accepted range is always
    /// `1..=deck_size`; `numbering` decides which index that lands on.
    /// Legacy numbering clamps `deck_size` itself to the last card.
    pub fn go_to_card(self, number: i64, numbering: CardNumbering) -> Result<Self, GoToError> {
        let max = self.deck_size;
        if number < 1 || number as u64 > max as u64 {
            return Err(GoToError::OutOfRange { max });
        }
        let number = number as usize;
        let target = match numbering {
            CardNumbering::Legacy => number,
            CardNumbering::OneBased => number - 1,
        };
        let current_index = target.min(max - 1);
        Ok(Self {
            current_index,
            ..self
        })
    }

    pub fn random<R>(self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            return self;
        }
        Self {
            current_index: rng.gen_range(0..self.deck_size),
            ..self
        }
    }
}

/// Parses the raw text of the card-number input. Mirrors a lenient integer
/// parse: leading digits count, trailing junk is ignored.
pub fn parse_card_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(digits.len(), |(idx, _)| idx);
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|value| value * sign)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn prev_at_start_is_noop() {
        let state = NavigationState::new(3);
        assert_eq!(state.prev(), state);
    }

    #[test]
    fn next_at_end_is_noop() {
        let state = NavigationState::new(2).next();
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.next(), state);
    }

    #[test]
    fn empty_deck_moves_nowhere() {
        let state = NavigationState::new(0);
        assert_eq!(state.next(), state);
        assert_eq!(state.prev(), state);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(state.random(&mut rng), state);
        assert_eq!(
            state.go_to_card(1, CardNumbering::Legacy),
            Err(GoToError::OutOfRange { max: 0 })
        );
    }

    #[test]
    fn legacy_go_to_card_keeps_raw_number() {
        let state = NavigationState::new(2);
        let moved = state.go_to_card(1, CardNumbering::Legacy).expect("in range");
        assert_eq!(moved.current_index(), 1);
    }

    #[test]
    fn legacy_go_to_last_number_stays_in_bounds() {
        let state = NavigationState::new(2);
        let moved = state.go_to_card(2, CardNumbering::Legacy).expect("in range");
        assert_eq!(moved.current_index(), 1);
    }

    #[test]
    fn one_based_go_to_card_subtracts_one() {
        let state = NavigationState::new(3).next().next();
        let moved = state.go_to_card(1, CardNumbering::OneBased).expect("in range");
        assert_eq!(moved.current_index(), 0);
    }

    #[test]
    fn go_to_card_rejects_out_of_range() {
        let state = NavigationState::new(2);
        for number in [0, 3, -4] {
            let err = state.go_to_card(number, CardNumbering::Legacy).unwrap_err();
            assert_eq!(err.to_string(), "Please enter a number between 1 and 2");
        }
    }

    #[test]
    fn random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        let state = NavigationState::new(5);
        for _ in 0..200 {
            let next = state.random(&mut rng);
            assert!(next.current_index() < 5);
        }
    }

    #[test]
    fn parse_card_number_is_lenient() {
        assert_eq!(parse_card_number("12"), Some(12));
        assert_eq!(parse_card_number(" 7abc"), Some(7));
        assert_eq!(parse_card_number("-2"), Some(-2));
        assert_eq!(parse_card_number(""), None);
        assert_eq!(parse_card_number("abc"), None);
    }

    #[test]
    fn numbering_parses_query_values() {
        assert_eq!(CardNumbering::parse("one-based"), Some(CardNumbering::OneBased));
        assert_eq!(CardNumbering::parse("LEGACY"), Some(CardNumbering::Legacy));
        assert_eq!(CardNumbering::parse("zero"), None);
    }
}
