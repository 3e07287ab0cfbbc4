//! Validation of selected words against the target sentence

/// Outcome of submitting a single word to a [`SentenceMatcher`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
	/// The word was the next one in the sentence
	Accepted,
	/// The word was the last missing one, the sentence is complete
	Completed,
	/// The word does not continue the sentence and was ignored
	Rejected,
}

/// Tracks how much of a target sentence has been selected, in order.
///
/// Accepted words always form a prefix of the expected words.
/// Rejected words leave the progress untouched, there is no penalty
/// for selecting a wrong word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SentenceMatcher {
	expected: Vec<String>,
	progress: Vec<String>,
}

impl SentenceMatcher {
	pub fn new(expected: Vec<String>) -> Self {
		Self {
			expected,
			progress: Vec::new(),
		}
	}

	/// Creates a matcher for a sentence, words are separated by whitespace
	pub fn from_sentence(sentence: &str) -> Self {
		Self::new(sentence.split_whitespace().map(str::to_owned).collect())
	}

	pub fn submit(&mut self, word: &str) -> MatchResult {
		let next_index = self.progress.len();
		match self.expected.get(next_index) {
			Some(expected) if expected == word => {
				self.progress.push(word.to_owned());
				if self.is_completed() {
					MatchResult::Completed
				} else {
					MatchResult::Accepted
				}
			}
			_ => MatchResult::Rejected,
		}
	}

	pub fn expected(&self) -> &[String] {
		&self.expected
	}

	pub fn progress(&self) -> &[String] {
		&self.progress
	}

	/// Whether every word has been selected.
	/// An empty sentence is never completed.
	pub fn is_completed(&self) -> bool {
		!self.expected.is_empty() && self.progress.len() == self.expected.len()
	}
}
