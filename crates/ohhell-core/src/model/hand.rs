use crate::model::card::Card;
use crate::model::suit::Suit;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self { cards };
        hand.sort();
        hand
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.sort();
    }

    pub fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&c| c == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit == suit)
    }

    /// Cards that may be played into a trick led with `led`: the led suit when
    /// held, otherwise anything.
    pub fn legal_plays(&self, led: Option<Suit>) -> Vec<Card> {
        match led {
            Some(suit) if self.has_suit(suit) => self
                .cards
                .iter()
                .copied()
                .filter(|card| card.suit == suit)
                .collect(),
            _ => self.cards.clone(),
        }
    }

    pub fn highest_of(&self, suit: Suit) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|card| card.suit == suit)
            .max_by_key(|card| card.rank)
    }

    pub fn lowest_of(&self, suit: Suit) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|card| card.suit == suit)
            .min_by_key(|card| card.rank)
    }

    pub fn count_of(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|card| card.suit == suit).count()
    }

    fn sort(&mut self) {
        self.cards
            .sort_by(|a, b| a.suit.index().cmp(&b.suit.index()).then(a.rank.cmp(&b.rank)));
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    #[test]
    fn add_and_remove_cards() {
        let mut hand = Hand::new();
        let card = Card::new(Rank::Three, Suit::Clubs);
        hand.add(card);
        assert!(hand.contains(card));
        assert!(hand.remove(card));
        assert!(!hand.contains(card));
        assert!(!hand.remove(card));
    }

    #[test]
    fn cards_are_sorted_by_suit_then_rank() {
        let mut hand = Hand::new();
        hand.add(Card::new(Rank::King, Suit::Clubs));
        hand.add(Card::new(Rank::Two, Suit::Spades));
        hand.add(Card::new(Rank::Ace, Suit::Spades));
        let ordered: Vec<_> = hand.iter().copied().collect();
        assert_eq!(ordered[0], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(ordered[1], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(ordered[2], Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn legal_plays_follow_led_suit_when_possible() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Clubs),
        ]);
        assert_eq!(
            hand.legal_plays(Some(Suit::Hearts)),
            vec![
                Card::new(Rank::Four, Suit::Hearts),
                Card::new(Rank::Jack, Suit::Hearts)
            ]
        );
        assert_eq!(hand.legal_plays(Some(Suit::Spades)).len(), 3);
        assert_eq!(hand.legal_plays(None).len(), 3);
    }

    #[test]
    fn suit_extremes() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Clubs),
        ]);
        assert_eq!(hand.highest_of(Suit::Hearts), Some(Card::new(Rank::Jack, Suit::Hearts)));
        assert_eq!(hand.lowest_of(Suit::Hearts), Some(Card::new(Rank::Four, Suit::Hearts)));
        assert_eq!(hand.highest_of(Suit::Diamonds), None);
        assert_eq!(hand.count_of(Suit::Hearts), 2);
    }
}
