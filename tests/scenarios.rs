use std::f32::consts::PI;

use glam::vec2;
use scribble_trace::geom::{distance_to_segment, Point};
use scribble_trace::reading::{transcript_matches, HeardOutcome, ReadingRound, DECK};
use scribble_trace::shape::{AngularWindow, LetterShape, Primitive};
use scribble_trace::*;

fn a_left_diagonal(samples: usize) -> Vec<Point> {
	(0..=samples)
		.map(|i| vec2(140.0, 250.0).lerp(vec2(200.0, 60.0), i as f32 / samples as f32))
		.collect()
}

#[test]
fn empty_traces_score_zero_for_supported_letters() {
	for letter in ShapeLibrary::builtin().letters() {
		assert_eq!(evaluate(letter, &[]), 0.0);
	}
}

#[test]
fn unsupported_letter_is_not_scored() {
	let q: LetterId = "q".parse().unwrap();
	assert_eq!(evaluate(q, &a_left_diagonal(20)), 0.0);
}

#[test]
fn a_scenario() {
	assert_eq!(evaluate(LetterId::A, &a_left_diagonal(40)), 1.0);
	assert_eq!(evaluate(LetterId::A, &a_left_diagonal(1)[..1]), 1.0);

	let far = [vec2(30.0, 30.0), vec2(370.0, 30.0), vec2(200.0, 295.0)];
	assert_eq!(evaluate(LetterId::A, &far), 0.0);
}

#[test]
fn c_scenario() {
	let center = vec2(200.0, 150.0);
	let at = |angle: f32| center + 90.0 * vec2(angle.cos(), angle.sin());
	assert_eq!(evaluate(LetterId::C, &[at(0.0)]), 1.0);
	assert_eq!(evaluate(LetterId::C, &[at(PI / 2.0)]), 1.0);
	assert_eq!(evaluate(LetterId::C, &[at(-2.0)]), 1.0);
	assert_eq!(evaluate(LetterId::C, &[at(0.95 * PI)]), 0.0);
	assert_eq!(evaluate(LetterId::C, &[at(-0.8 * PI)]), 0.0);
}

#[test]
fn segment_distance_properties() {
	let (start, end) = (vec2(160.0, 170.0), vec2(240.0, 170.0));
	assert_eq!(distance_to_segment(vec2(200.0, 170.0), start, end), 0.0);
	assert_eq!(distance_to_segment(vec2(250.0, 170.0), start, end), 10.0);
	assert_eq!(distance_to_segment(vec2(154.0, 162.0), start, end), 10.0);
}

#[test]
fn wrapping_window_describes_a_left_facing_arc() {
	// A reversed C opening to the left.
	let letter = LetterId::new('Z').unwrap();
	let library = ShapeLibrary::new().with_shape(
		letter,
		LetterShape::new([Primitive::arc(
			vec2(200.0, 150.0),
			90.0,
			AngularWindow::new(PI / 4.0, -PI / 4.0),
		)]),
	);
	let evaluator = TracingEvaluator::new(library, 22.0);
	assert_eq!(evaluator.evaluate(letter, &[vec2(110.0, 150.0)]), 1.0);
	assert_eq!(evaluator.evaluate(letter, &[vec2(290.0, 150.0)]), 0.0);
}

#[test]
fn tracing_session_end_to_end() {
	let mut session = TracingSession::default();
	assert_eq!(session.next(), NextOutcome::TraceFirst);

	// A tap is ignored.
	session.pointer_down(vec2(200.0, 60.0));
	assert!(matches!(session.pointer_up(), Some(TraceOutcome::TooShort { .. })));
	session.clear();

	let library = ShapeLibrary::builtin();
	let mut completed = false;
	while !completed {
		let letter = session.current();
		let points = library.get(letter).unwrap().sample(5.0);
		session.pointer_down(points[0]);
		for &p in &points[1..] {
			assert!(session.pointer_move(p));
		}
		assert!(matches!(
			session.pointer_up(),
			Some(TraceOutcome::Traced { letter: traced, .. }) if traced == letter
		));
		completed = session.next() == NextOutcome::OpenStore;
	}
	assert_eq!(session.current(), LetterId::C);
}

#[test]
fn reading_round_end_to_end() {
	assert!(transcript_matches("BALL", "a ball"));

	let mut round = ReadingRound::random(&mut fastrand::Rng::with_seed(7));
	let words: Vec<_> = round.cards().iter().map(|c| c.word).collect();
	assert!(words.iter().all(|w| DECK.iter().any(|c| c.word == *w)));

	for (i, word) in words.iter().enumerate() {
		assert_eq!(round.hear("banana"), HeardOutcome::TryAgain);
		let outcome = round.hear(&word.to_lowercase());
		if i + 1 < words.len() {
			assert_eq!(
				outcome,
				HeardOutcome::Matched {
					word: *word,
					next: words[i + 1]
				}
			);
		} else {
			assert_eq!(outcome, HeardOutcome::Finished);
		}
	}
}
