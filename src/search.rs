//! Search Submit Gate
//!
//! Trailing debounce for search-as-you-type. Each keystroke issues a
//! ticket; only the newest ticket may submit when its timer fires.

/// Whether a debounced search with `length` characters should submit.
/// A cleared field submits too, so the unfiltered list comes back.
pub fn should_submit(length: usize, min_chars: usize) -> bool {
    length == 0 || length >= min_chars
}

/// Issued per keystroke; fires `due_at` ms after it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticket {
    pub id: u64,
    pub due_at: f64,
}

/// Debounce state of one search input
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    quiet_ms: u32,
    min_chars: usize,
    next_id: u64,
    latest: Option<u64>,
    submitted: usize,
}

impl SearchDebounce {
    pub fn new(quiet_ms: u32, min_chars: usize) -> Self {
        Self { quiet_ms, min_chars, next_id: 0, latest: None, submitted: 0 }
    }

    pub fn quiet_ms(&self) -> u32 {
        self.quiet_ms
    }

    /// Record a keystroke at `now` ms. Any earlier ticket goes stale.
    pub fn input(&mut self, now: f64) -> Ticket {
        self.next_id += 1;
        self.latest = Some(self.next_id);
        Ticket { id: self.next_id, due_at: now + f64::from(self.quiet_ms) }
    }

    /// A ticket's timer elapsed with the field at `length` characters.
    /// True when the form should be submitted.
    pub fn fire(&mut self, ticket: &Ticket, length: usize) -> bool {
        if self.latest != Some(ticket.id) {
            return false;
        }
        self.latest = None;
        if !should_submit(length, self.min_chars) {
            return false;
        }
        self.submitted += 1;
        true
    }

    /// Submissions approved so far
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gate() {
        assert!(should_submit(0, 3));
        assert!(!should_submit(1, 3));
        assert!(!should_submit(2, 3));
        assert!(should_submit(3, 3));
        assert!(should_submit(42, 3));
    }

    #[test]
    fn test_burst_submits_once_after_last_keystroke() {
        let mut search = SearchDebounce::new(500, 3);
        let first = search.input(0.0);
        let second = search.input(120.0);
        let third = search.input(260.0);
        assert_eq!(third.due_at, 760.0);

        assert!(!search.fire(&first, 3));
        assert!(!search.fire(&second, 3));
        assert!(search.fire(&third, 3));
        assert!(!search.fire(&third, 3));
        assert_eq!(search.submitted(), 1);
    }

    #[test]
    fn test_short_query_never_submits() {
        let mut search = SearchDebounce::new(500, 3);
        let one = search.input(0.0);
        assert!(!search.fire(&one, 1));
        let two = search.input(900.0);
        assert!(!search.fire(&two, 2));
        assert_eq!(search.submitted(), 0);
    }

    #[test]
    fn test_clearing_submits() {
        let mut search = SearchDebounce::new(500, 3);
        let cleared = search.input(0.0);
        assert!(search.fire(&cleared, 0));
        assert_eq!(search.submitted(), 1);
    }

    #[test]
    fn test_new_input_cancels_pending() {
        let mut search = SearchDebounce::new(500, 3);
        let pending = search.input(0.0);
        let _typing = search.input(400.0);
        assert!(!search.fire(&pending, 5));
        assert_eq!(search.submitted(), 0);
    }

    proptest! {
        // One submit per quiet period: a keystroke submits only if the
        // next one comes later than its timer.
        #[test]
        fn prop_one_submit_per_quiet_period(gaps in prop::collection::vec((1u32..1500).prop_filter("not on the deadline", |g| *g != 500), 0..30)) {
            let mut times = vec![0.0f64];
            for gap in &gaps {
                let last = *times.last().unwrap();
                times.push(last + f64::from(*gap));
            }

            let mut search = SearchDebounce::new(500, 3);
            let mut tickets: Vec<Ticket> = Vec::new();
            let mut events: Vec<(f64, bool, usize)> = Vec::new();
            for (i, t) in times.iter().enumerate() {
                events.push((*t, true, i));
                events.push((t + 500.0, false, i));
            }
            events.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

            for (at, is_input, i) in events {
                if is_input {
                    tickets.push(search.input(at));
                } else {
                    search.fire(&tickets[i], 3);
                }
            }

            let expected = (0..times.len())
                .filter(|&i| i + 1 == times.len() || times[i + 1] > times[i] + 500.0)
                .count();
            prop_assert_eq!(search.submitted(), expected);
        }
    }
}
