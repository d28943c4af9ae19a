//! Multiple-choice quiz generation over a filtered event selection.
//!
//! Questions are ephemeral: generated fresh per quiz run and discarded on
//! reset. Distractors are sampled without replacement from the distinct
//! years/titles of the *full* pool the quiz was built from, never just the
//! drawn subsample, so small selections still get plausible wrong answers.

use crate::event::Event;
use crate::rng::{RandomSource, shuffle};
use serde::Serialize;

/// Hard cap on questions per quiz run.
pub const MAX_QUESTIONS: usize = 15;

/// Distractors offered per question, at most.
const MAX_DISTRACTORS: usize = 3;

/// One answer option. Exactly one option per question is correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub label: String,
    pub correct: bool,
}

/// A generated question: prompt plus shuffled options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<Choice>,
}

impl Question {
    /// Index of the correct option.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|choice| choice.correct)
    }
}

/// Generation parameters.
///
/// `year_guess_probability` is the chance a question asks for the year of a
/// titled event rather than the event of a dated label. The original
/// explorer hardcodes a 50/50 coin; here it is a configurable default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizParams {
    pub count: usize,
    pub year_guess_probability: f64,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            count: 5,
            year_guess_probability: 0.5,
        }
    }
}

/// Clamp a requested question count to `[1, min(MAX_QUESTIONS, pool_len)]`.
///
/// Callers clamp before invoking [`generate`]; the generator itself assumes
/// a valid count and a non-empty pool.
#[must_use]
pub fn clamp_count(requested: usize, pool_len: usize) -> usize {
    requested.clamp(1, MAX_QUESTIONS.min(pool_len).max(1))
}

/// Generate `params.count` questions from `pool`.
///
/// Draws that many distinct events (shuffle-and-take), then builds one
/// question per drawn event, choosing the archetype independently per
/// question. Option order is randomized per question.
pub fn generate(pool: &[Event], params: &QuizParams, rng: &mut impl RandomSource) -> Vec<Question> {
    let mut drawn: Vec<&Event> = pool.iter().collect();
    shuffle(rng, &mut drawn);
    drawn.truncate(params.count);

    let mut years: Vec<i32> = pool.iter().map(|e| e.year).collect();
    years.sort_unstable();
    years.dedup();

    let mut titles: Vec<&str> = pool.iter().map(|e| e.title.as_str()).collect();
    titles.sort_unstable();
    titles.dedup();

    drawn
        .into_iter()
        .map(|event| {
            if rng.next_f64() < params.year_guess_probability {
                year_question(event, &years, rng)
            } else {
                title_question(event, &titles, rng)
            }
        })
        .collect()
}

/// Up to `n` values drawn uniformly without replacement.
fn draw_distinct<T: Clone>(rng: &mut impl RandomSource, pool: &[T], n: usize) -> Vec<T> {
    let mut candidates: Vec<T> = pool.to_vec();
    shuffle(rng, &mut candidates);
    candidates.truncate(n);
    candidates
}

/// "In which year did this happen?" — correct answer is the event's year.
fn year_question(event: &Event, years: &[i32], rng: &mut impl RandomSource) -> Question {
    let alternates: Vec<i32> = years
        .iter()
        .copied()
        .filter(|year| *year != event.year)
        .collect();
    let mut options: Vec<Choice> = draw_distinct(rng, &alternates, MAX_DISTRACTORS)
        .into_iter()
        .map(|year| Choice {
            label: year.to_string(),
            correct: false,
        })
        .collect();
    options.push(Choice {
        label: event.year.to_string(),
        correct: true,
    });
    shuffle(rng, &mut options);
    Question {
        text: format!("In which year did this happen: \u{201c}{}\u{201d}?", event.title),
        options,
    }
}

/// "Which event occurred in <Month Year>?" — correct answer is the title.
fn title_question(event: &Event, titles: &[&str], rng: &mut impl RandomSource) -> Question {
    let alternates: Vec<&str> = titles
        .iter()
        .copied()
        .filter(|title| *title != event.title)
        .collect();
    let mut options: Vec<Choice> = draw_distinct(rng, &alternates, MAX_DISTRACTORS)
        .into_iter()
        .map(|title| Choice {
            label: title.to_string(),
            correct: false,
        })
        .collect();
    options.push(Choice {
        label: event.title.clone(),
        correct: true,
    });
    shuffle(rng, &mut options);
    Question {
        text: format!(
            "Which of the following occurred in {}?",
            event.quiz_date_label()
        ),
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;

    fn event(id: u64, year: i32, month: Option<u32>, title: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
            description: String::new(),
            year,
            month,
            day: None,
            category: None,
            region: None,
            source: None,
        }
    }

    fn pool() -> Vec<Event> {
        vec![
            event(1, 1969, Some(7), "Moon landing"),
            event(2, 1989, Some(11), "Fall of the Berlin Wall"),
            event(3, 1991, Some(8), "World Wide Web goes public"),
            event(4, 1953, Some(5), "First ascent of Everest"),
            event(5, 1928, Some(9), "Discovery of penicillin"),
        ]
    }

    #[test]
    fn clamp_count_bounds() {
        assert_eq!(clamp_count(5, 100), 5);
        assert_eq!(clamp_count(0, 100), 1);
        assert_eq!(clamp_count(50, 100), MAX_QUESTIONS);
        assert_eq!(clamp_count(10, 3), 3);
        assert_eq!(clamp_count(10, 0), 1);
    }

    #[test]
    fn generates_exactly_count_questions() {
        let pool = pool();
        let params = QuizParams {
            count: 3,
            ..QuizParams::default()
        };
        let questions = generate(&pool, &params, &mut SeededRng::new(1));
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn every_question_has_exactly_one_correct_option() {
        let pool = pool();
        for seed in 0..50 {
            let params = QuizParams {
                count: pool.len(),
                ..QuizParams::default()
            };
            for question in generate(&pool, &params, &mut SeededRng::new(seed)) {
                let correct = question.options.iter().filter(|o| o.correct).count();
                assert_eq!(correct, 1, "seed {seed}: {question:?}");
            }
        }
    }

    #[test]
    fn no_duplicate_option_labels() {
        let pool = pool();
        for seed in 0..50 {
            let params = QuizParams {
                count: pool.len(),
                ..QuizParams::default()
            };
            for question in generate(&pool, &params, &mut SeededRng::new(seed)) {
                let mut labels: Vec<&str> =
                    question.options.iter().map(|o| o.label.as_str()).collect();
                labels.sort_unstable();
                labels.dedup();
                assert_eq!(labels.len(), question.options.len(), "seed {seed}");
            }
        }
    }

    #[test]
    fn drawn_events_are_distinct() {
        // With year_guess_probability = 1.0 every prompt embeds its title,
        // so prompt uniqueness proves the draw was without replacement.
        let pool = pool();
        let params = QuizParams {
            count: pool.len(),
            year_guess_probability: 1.0,
        };
        let questions = generate(&pool, &params, &mut SeededRng::new(3));
        let mut prompts: Vec<&str> = questions.iter().map(|q| q.text.as_str()).collect();
        prompts.sort_unstable();
        prompts.dedup();
        assert_eq!(prompts.len(), pool.len());
    }

    #[test]
    fn two_distinct_years_yield_two_options() {
        let pool = vec![event(1, 1990, None, "a"), event(2, 1991, None, "b")];
        let params = QuizParams {
            count: 2,
            year_guess_probability: 1.0,
        };
        for question in generate(&pool, &params, &mut SeededRng::new(4)) {
            assert_eq!(question.options.len(), 2);
            assert_eq!(question.options.iter().filter(|o| o.correct).count(), 1);
        }
    }

    #[test]
    fn single_event_pool_degrades_to_one_option() {
        let pool = vec![event(1, 1990, None, "only")];
        let params = QuizParams {
            count: 1,
            ..QuizParams::default()
        };
        let questions = generate(&pool, &params, &mut SeededRng::new(5));
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 1);
        assert!(questions[0].options[0].correct);
    }

    #[test]
    fn full_pool_yields_four_options() {
        let pool = pool();
        let params = QuizParams {
            count: pool.len(),
            ..QuizParams::default()
        };
        for question in generate(&pool, &params, &mut SeededRng::new(6)) {
            assert_eq!(question.options.len(), 4);
        }
    }

    #[test]
    fn title_guess_prompt_uses_month_and_year() {
        let pool = pool();
        let params = QuizParams {
            count: 1,
            year_guess_probability: 0.0,
        };
        let questions = generate(&pool, &params, &mut SeededRng::new(7));
        assert!(questions[0].text.starts_with("Which of the following occurred in "));
    }

    #[test]
    fn generation_is_deterministic_under_a_seed() {
        let pool = pool();
        let params = QuizParams {
            count: 4,
            ..QuizParams::default()
        };
        let a = generate(&pool, &params, &mut SeededRng::new(11));
        let b = generate(&pool, &params, &mut SeededRng::new(11));
        assert_eq!(a, b);
    }

    #[test]
    fn correct_index_finds_the_correct_option() {
        let question = Question {
            text: "q".into(),
            options: vec![
                Choice {
                    label: "wrong".into(),
                    correct: false,
                },
                Choice {
                    label: "right".into(),
                    correct: true,
                },
            ],
        };
        assert_eq!(question.correct_index(), Some(1));
    }
}
