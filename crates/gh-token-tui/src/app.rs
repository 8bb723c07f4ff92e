//! Picker state management.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Picker state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// Waiting for the user.
    Picking,
    /// The user picked this candidate.
    Selected(String),
    /// The user backed out.
    Cancelled,
}

/// A candidate that matches the current query.
#[derive(Debug, Clone)]
pub struct Match {
    /// Index into `App::candidates`.
    pub index: usize,
    /// Match score for sorting.
    pub score: i64,
    /// Matched character positions, for highlighting.
    pub positions: Vec<usize>,
}

/// Main picker model.
pub struct App {
    /// Current state.
    pub state: AppState,
    /// Candidates in the order they were handed in.
    pub candidates: Vec<String>,
    /// Query typed so far.
    pub query: String,
    /// Candidates matching the query, best first.
    pub matches: Vec<Match>,
    /// Index of the highlighted row in `matches`.
    pub selected_index: usize,
    matcher: SkimMatcherV2,
}

impl App {
    /// Create a picker over `candidates`, initially showing all of them.
    pub fn new(candidates: Vec<String>) -> Self {
        let mut app = Self {
            state: AppState::Picking,
            candidates,
            query: String::new(),
            matches: Vec::new(),
            selected_index: 0,
            matcher: SkimMatcherV2::default(),
        };
        app.refresh_matches();
        app
    }

    /// Recompute matches for the current query.
    ///
    /// An empty query keeps the given order. Otherwise matches are
    /// sorted by score, ties keeping the given order.
    pub fn refresh_matches(&mut self) {
        self.selected_index = 0;

        if self.query.is_empty() {
            self.matches = (0..self.candidates.len())
                .map(|index| Match {
                    index,
                    score: 0,
                    positions: Vec::new(),
                })
                .collect();
            return;
        }

        let mut scored: Vec<_> = self
            .candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                self.matcher
                    .fuzzy_indices(candidate, &self.query)
                    .map(|(score, positions)| Match {
                        index,
                        score,
                        positions,
                    })
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        self.matches = scored;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh_matches();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refresh_matches();
        }
    }

    /// Move the highlight up.
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move the highlight down.
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.matches.len() {
            self.selected_index += 1;
        }
    }

    /// The highlighted candidate, if anything matches.
    pub fn current(&self) -> Option<&str> {
        self.matches
            .get(self.selected_index)
            .map(|m| self.candidates[m.index].as_str())
    }

    /// Pick the highlighted candidate; with nothing highlighted this cancels.
    pub fn confirm(&mut self) {
        self.state = match self.current() {
            Some(candidate) => AppState::Selected(candidate.to_string()),
            None => AppState::Cancelled,
        };
    }

    pub fn cancel(&mut self) {
        self.state = AppState::Cancelled;
    }

    pub fn is_done(&self) -> bool {
        !matches!(self.state, AppState::Picking)
    }

    /// Final answer once the picker is done.
    pub fn into_selection(self) -> Option<String> {
        match self.state {
            AppState::Selected(choice) => Some(choice),
            AppState::Picking | AppState::Cancelled => None,
        }
    }
}
