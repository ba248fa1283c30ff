//! Client-side state of a timed exam attempt.
//!
//! The countdown and the submission guard are plain values so the page can keep
//! them in signals and drive them from a one-second timer.

use crate::exam::{Answer, ExamDetails};

/// Outcome of a single countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing to do: the exam is untimed, or the countdown already expired.
    Idle,
    /// Seconds left after this step.
    Running(u32),
    /// The countdown just reached zero. Returned exactly once.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Countdown {
    Untimed,
    Running(u32),
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptClock {
    countdown: Countdown,
}

impl AttemptClock {
    /// `time_limit` is in minutes. Zero, negative or absent means untimed.
    pub fn new(time_limit: Option<i64>) -> Self {
        let countdown = match time_limit {
            Some(minutes) if minutes > 0 => {
                let secs = minutes.saturating_mul(60).min(u32::MAX as i64) as u32;
                Countdown::Running(secs)
            }
            _ => Countdown::Untimed,
        };
        Self { countdown }
    }

    pub fn untimed() -> Self {
        Self {
            countdown: Countdown::Untimed,
        }
    }

    pub fn is_timed(&self) -> bool {
        self.countdown != Countdown::Untimed
    }

    pub fn is_expired(&self) -> bool {
        self.countdown == Countdown::Expired
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        match self.countdown {
            Countdown::Untimed => None,
            Countdown::Running(secs) => Some(secs),
            Countdown::Expired => Some(0),
        }
    }

    pub fn tick(&mut self) -> Tick {
        match self.countdown {
            Countdown::Untimed | Countdown::Expired => Tick::Idle,
            Countdown::Running(secs) if secs <= 1 => {
                self.countdown = Countdown::Expired;
                Tick::Expired
            }
            Countdown::Running(secs) => {
                self.countdown = Countdown::Running(secs - 1);
                Tick::Running(secs - 1)
            }
        }
    }

    /// `MM:SS`, or `None` for untimed exams.
    pub fn display(&self) -> Option<String> {
        self.remaining_secs().map(format_clock)
    }
}

pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Ensures answers are posted at most once at a time, and never again once the
/// server has accepted (or already holds) them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    in_flight: bool,
    settled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    AlreadySubmitted,
    Failed,
}

impl SubmitGuard {
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight || self.settled {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self, outcome: SubmitOutcome) {
        self.in_flight = false;
        if outcome != SubmitOutcome::Failed {
            self.settled = true;
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// Accumulated responses plus the question cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
    current: usize,
}

impl AnswerSheet {
    pub fn for_exam(exam: &ExamDetails) -> Self {
        Self {
            answers: exam
                .questions
                .iter()
                .map(|q| Answer {
                    question_id: q.id.clone(),
                    response: String::new(),
                })
                .collect(),
            current: 0,
        }
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.answers.len()
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.current += 1;
        }
    }

    pub fn jump(&mut self, index: usize) {
        if index < self.answers.len() {
            self.current = index;
        }
    }

    pub fn respond(&mut self, question_id: &str, response: impl Into<String>) {
        if let Some(answer) = self
            .answers
            .iter_mut()
            .find(|a| a.question_id == question_id)
        {
            answer.response = response.into();
        }
    }

    pub fn response(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(|a| a.response.as_str())
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.response(index).is_some_and(|r| !r.is_empty())
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| !a.response.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::Question;

    fn exam(ids: &[&str]) -> ExamDetails {
        ExamDetails {
            id: "exam-1".into(),
            title: "Generated Exam".into(),
            questions_type: "MCQ".into(),
            difficulty: "medium".into(),
            num_questions: ids.len() as u32,
            marks_per_question: 5,
            total_marks: 5 * ids.len() as u32,
            time_limit: Some(1),
            questions: ids
                .iter()
                .map(|id| Question {
                    id: id.to_string(),
                    statement: format!("Question {id}"),
                    case_study: None,
                    question_data: None,
                })
                .collect(),
        }
    }

    #[test]
    fn untimed_exam_never_decrements_or_expires() {
        for limit in [None, Some(0), Some(-5)] {
            let mut clock = AttemptClock::new(limit);
            assert!(!clock.is_timed());
            for _ in 0..10_000 {
                assert_eq!(clock.tick(), Tick::Idle);
            }
            assert_eq!(clock.remaining_secs(), None);
            assert_eq!(clock.display(), None);
        }
    }

    #[test]
    fn timed_exam_counts_down_in_seconds() {
        let mut clock = AttemptClock::new(Some(2));
        assert_eq!(clock.remaining_secs(), Some(120));
        assert_eq!(clock.display().as_deref(), Some("02:00"));
        assert_eq!(clock.tick(), Tick::Running(119));
        assert_eq!(clock.display().as_deref(), Some("01:59"));
    }

    #[test]
    fn expiry_is_reported_exactly_once() {
        let mut clock = AttemptClock::new(Some(1));
        let expired = (0..500)
            .map(|_| clock.tick())
            .filter(|t| *t == Tick::Expired)
            .count();
        assert_eq!(expired, 1);
        assert!(clock.is_expired());
        assert_eq!(clock.display().as_deref(), Some("00:00"));
    }

    #[test]
    fn expiry_triggers_at_most_one_submission() {
        let mut clock = AttemptClock::new(Some(1));
        let mut guard = SubmitGuard::default();
        let mut calls = 0;

        for _ in 0..200 {
            if clock.tick() == Tick::Expired && guard.try_begin() {
                calls += 1;
            }
            // the manual button races the timer while the request is pending
            if clock.is_expired() && guard.try_begin() {
                calls += 1;
            }
        }
        assert_eq!(calls, 1);

        guard.finish(SubmitOutcome::Accepted);
        assert!(!guard.try_begin());
    }

    #[test]
    fn failed_submission_can_be_retried_but_conflict_settles() {
        let mut guard = SubmitGuard::default();
        assert!(guard.try_begin());
        guard.finish(SubmitOutcome::Failed);
        assert!(guard.try_begin());
        guard.finish(SubmitOutcome::AlreadySubmitted);
        assert!(guard.is_settled());
        assert!(!guard.try_begin());
    }

    #[test]
    fn answer_sheet_navigation_is_clamped() {
        let mut sheet = AnswerSheet::for_exam(&exam(&["a", "b", "c"]));
        sheet.previous();
        assert_eq!(sheet.current(), 0);
        sheet.next();
        sheet.next();
        sheet.next();
        assert_eq!(sheet.current(), 2);
        assert!(sheet.is_last());
        sheet.jump(7);
        assert_eq!(sheet.current(), 2);
        sheet.jump(1);
        assert_eq!(sheet.current(), 1);
    }

    #[test]
    fn responses_are_recorded_per_question() {
        let mut sheet = AnswerSheet::for_exam(&exam(&["a", "b"]));
        sheet.respond("b", "option3");
        sheet.respond("missing", "option1");
        assert!(!sheet.is_answered(0));
        assert!(sheet.is_answered(1));
        assert_eq!(sheet.answered_count(), 1);
        assert_eq!(sheet.answers()[1].response, "option3");
    }
}
