use ohhell_core::game::{EngineOptions, OhHell, ScriptedPlayer, ShufflePolicy, round_sizes};
use ohhell_core::model::card::Card;
use ohhell_core::model::deck::Deck;
use ohhell_core::model::rank::Rank;
use ohhell_core::model::seat::Seat;
use ohhell_core::model::suit::Suit;
use ohhell_core::model::trick::Trick;
use proptest::prelude::*;

fn trick_of(cards: &[Card]) -> Trick {
    let mut trick = Trick::new(cards.len());
    for (index, card) in cards.iter().enumerate() {
        trick.play(Seat::new(index), *card).expect("distinct seats");
    }
    trick
}

fn trick_cards() -> impl Strategy<Value = Vec<Card>> {
    (2usize..=6).prop_flat_map(|seats| {
        prop::sample::subsequence(Deck::standard().cards().to_vec(), seats).prop_shuffle()
    })
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

#[test]
fn unshuffled_match_is_fully_scored() {
    let mut engine = OhHell::new(vec![ScriptedPlayer::new(); 4]).expect("four seats");
    let outcome = engine.play_match().expect("match completes");

    assert_eq!(outcome.rounds.len(), 10);
    assert_eq!(
        outcome.rounds.iter().map(|r| r.cards_per_player).collect::<Vec<_>>(),
        round_sizes(4).collect::<Vec<_>>()
    );
    for player in engine.players() {
        assert!(player.match_result().is_some());
    }
    let winners_told: Vec<_> = engine
        .players()
        .iter()
        .enumerate()
        .filter(|(_, player)| matches!(player.match_result(), Some((true, _))))
        .map(|(index, _)| Seat::new(index))
        .collect();
    assert_eq!(winners_told, outcome.winners);
}

proptest! {
    #[test]
    fn full_matches_keep_trick_and_score_totals(
        seed in any::<u64>(),
        seats in 2usize..=6,
        dealer in 0u8..6,
        every_round in any::<bool>(),
    ) {
        let options = EngineOptions {
            shuffle: if every_round { ShufflePolicy::EveryRound } else { ShufflePolicy::OncePerMatch },
            seed: Some(seed),
            first_dealer: Seat(dealer),
        };
        let mut engine = OhHell::with_options(vec![ScriptedPlayer::new(); seats], options)
            .expect("valid seat count");
        let outcome = engine.play_match().expect("fallback play is always legal");

        prop_assert_eq!(outcome.rounds.len(), round_sizes(seats).count());
        for round in &outcome.rounds {
            prop_assert_eq!(round.tricks_won.iter().sum::<u32>() as usize, round.cards_per_player);
            prop_assert_ne!(round.bids.iter().sum::<u32>() as usize, round.cards_per_player);
        }
        for seat in 0..seats {
            let summed: u32 = outcome.rounds.iter().map(|round| round.round_scores[seat]).sum();
            prop_assert_eq!(summed, outcome.scores[seat]);
        }
        let best = outcome.scores.iter().copied().max().unwrap_or(0);
        for winner in &outcome.winners {
            prop_assert_eq!(outcome.scores[winner.index()], best);
        }
        prop_assert_eq!(outcome.joint, outcome.winners.len() > 1);
    }

    #[test]
    fn winner_holds_the_highest_trump_or_led_card(cards in trick_cards(), trump in any_suit()) {
        let trick = trick_of(&cards);
        let winner = trick.winner(trump).expect("non-empty trick");
        let winning = cards[winner.index()];
        let led = cards[0].suit;

        let trumps: Vec<_> = cards.iter().filter(|card| card.suit == trump).collect();
        if trumps.is_empty() {
            prop_assert_eq!(winning.suit, led);
            prop_assert!(cards.iter().filter(|card| card.suit == led).all(|card| card.rank <= winning.rank));
        } else {
            prop_assert_eq!(winning.suit, trump);
            prop_assert!(trumps.iter().all(|card| card.rank <= winning.rank));
        }
    }

    #[test]
    fn raising_another_seat_above_the_winner_hands_it_the_trick(
        cards in trick_cards(),
        trump in any_suit(),
        pick in any::<prop::sample::Index>(),
    ) {
        let winner = trick_of(&cards).winner(trump).expect("non-empty trick");
        let winning = cards[winner.index()];

        let others: Vec<usize> = (0..cards.len()).filter(|i| *i != winner.index()).collect();
        let challenger = others[pick.index(others.len())];
        let raise = Rank::ORDERED
            .iter()
            .rev()
            .map(|rank| Card::new(*rank, winning.suit))
            .find(|card| card.rank > winning.rank && !cards.contains(card));

        if let Some(raise) = raise {
            let mut raised = cards.clone();
            raised[challenger] = raise;
            prop_assert_eq!(trick_of(&raised).winner(trump), Some(Seat::new(challenger)));
        }
    }
}
