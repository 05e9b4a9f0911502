//! Conversation history assembly.

use story_gemini::Content;
use tracing::debug;

/// Pair prior questions and answers by index into alternating
/// `user` / `model` turns.
///
/// Only the first `min(questions.len(), answers.len())` pairs are used; the
/// tail of the longer list is dropped without error. If either list is absent
/// or empty the history is empty.
pub fn assemble_history(questions: Option<&[String]>, answers: Option<&[String]>) -> Vec<Content> {
    let (Some(questions), Some(answers)) = (questions, answers) else {
        return Vec::new();
    };

    let pairs = questions.len().min(answers.len());
    let dropped = questions.len().max(answers.len()) - pairs;
    if dropped > 0 {
        debug!(
            questions = questions.len(),
            answers = answers.len(),
            dropped,
            "history lists differ in length; truncating"
        );
    }

    questions
        .iter()
        .zip(answers)
        .flat_map(|(q, a)| [Content::user(q.as_str()), Content::model(a.as_str())])
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use story_gemini::Role;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn texts(history: &[Content]) -> Vec<(Role, &str)> {
        history
            .iter()
            .map(|c| {
                (
                    c.role.expect("history turns carry a role"),
                    c.parts[0].text.as_deref().unwrap_or_default(),
                )
            })
            .collect()
    }

    #[test]
    fn longer_question_list_is_truncated() {
        let q = strings(&["a", "b", "c"]);
        let a = strings(&["x", "y"]);
        let history = assemble_history(Some(&q), Some(&a));
        assert_eq!(
            texts(&history),
            vec![
                (Role::User, "a"),
                (Role::Model, "x"),
                (Role::User, "b"),
                (Role::Model, "y"),
            ]
        );
    }

    #[test]
    fn longer_answer_list_is_truncated() {
        let q = strings(&["a"]);
        let a = strings(&["x", "y", "z"]);
        let history = assemble_history(Some(&q), Some(&a));
        assert_eq!(texts(&history), vec![(Role::User, "a"), (Role::Model, "x")]);
    }

    #[test]
    fn absent_or_empty_lists_give_empty_history() {
        let q = strings(&["a"]);
        let empty: Vec<String> = Vec::new();
        assert!(assemble_history(None, None).is_empty());
        assert!(assemble_history(Some(&q), None).is_empty());
        assert!(assemble_history(None, Some(&q)).is_empty());
        assert!(assemble_history(Some(&q), Some(&empty)).is_empty());
        assert!(assemble_history(Some(&empty), Some(&q)).is_empty());
    }

    #[test]
    fn length_and_alternation_hold_for_all_small_shapes() {
        for p in 0..6 {
            for q in 0..6 {
                let questions: Vec<String> = (0..p).map(|i| format!("q{i}")).collect();
                let answers: Vec<String> = (0..q).map(|i| format!("a{i}")).collect();
                let history = assemble_history(Some(&questions), Some(&answers));

                assert_eq!(history.len(), 2 * p.min(q), "p={p} q={q}");
                for (i, turn) in history.iter().enumerate() {
                    let expected = if i % 2 == 0 { Role::User } else { Role::Model };
                    assert_eq!(turn.role, Some(expected));
                    assert_eq!(turn.parts.len(), 1);
                }
                let n = p.min(q);
                assert!(history.iter().all(|c| {
                    let t = c.parts[0].text.as_deref().unwrap_or_default();
                    t[1..].parse::<usize>().unwrap() < n
                }));
            }
        }
    }
}
