//! Replays a scripted visit through both games and logs what happens.

use scribble_trace::reading::{HeardOutcome, ReadingRound};
use scribble_trace::session::PLAY_STORE_URL;
use scribble_trace::{NextOutcome, ShapeLibrary, TraceOutcome, TracingConfig, TracingSession};

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.finish(),
	)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing` for any dependency that logs through `log`.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

/// Traces every playable letter by following its guide, with one sloppy attempt first.
fn replay_tracing() -> anyhow::Result<()> {
	let library = ShapeLibrary::builtin();
	let mut session = TracingSession::new(library.clone(), TracingConfig::default())?;

	loop {
		let letter = session.current();
		let Some(shape) = library.get(letter) else {
			anyhow::bail!("no guide for {letter}");
		};

		// A wobbly attempt far from the guide, then a clean one.
		let sloppy = shape.sample(6.0).into_iter().map(|p| p + glam::vec2(60.0, 40.0));
		let clean = shape.sample(6.0);
		for (attempt, points) in [sloppy.collect::<Vec<_>>(), clean].into_iter().enumerate() {
			let Some((first, rest)) = points.split_first() else {
				continue;
			};
			session.pointer_down(*first);
			for &p in rest {
				session.pointer_move(p);
			}
			let outcome = session.pointer_up();
			let pad = session.pad();
			tracing::info!(
				%letter,
				attempt,
				?outcome,
				strokes = pad.strokes(),
				size = ?pad.bounds().size(),
				"gesture ended"
			);
			if let Some(TraceOutcome::TryAgain { .. }) = outcome {
				session.clear();
			}
		}

		match session.next() {
			NextOutcome::Advanced(next) => tracing::info!(%next, "moving on"),
			NextOutcome::OpenStore => {
				tracing::info!(url = PLAY_STORE_URL, "all letters traced");
				return Ok(());
			}
			NextOutcome::TraceFirst => anyhow::bail!("{letter} was not traced"),
		}
	}
}

fn replay_reading() {
	let mut round = ReadingRound::random(&mut fastrand::Rng::new());
	while let Some(card) = round.current().copied() {
		tracing::info!(word = card.word, image = card.image, "showing word");
		if round.hear("hmm") == HeardOutcome::TryAgain {
			tracing::info!(word = card.word, "asked to try again");
		}
		let transcript = format!("the {}", card.word.to_lowercase());
		tracing::info!(%transcript, outcome = ?round.hear(&transcript), "heard");
	}
	tracing::info!(url = PLAY_STORE_URL, "round finished");
}

fn main() {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		eprintln!("{error}");
	}

	if let Err(error) = replay_tracing() {
		tracing::error!(error = error.to_string());
		std::process::exit(1);
	}
	replay_reading();
}
