//! Behavioural properties of the individual rules
use rst_style_language_server::core::apply_fix;
use rst_style_language_server::rules::{
    BureaucraticWordsRule, HeadingGapRule, PlaceholderCaseRule, ReplaceYoRule, SentencePerLineRule,
};
use rst_style_language_server::{Fix, Position, PositionIndex, Problem, Range, Rule};

fn run(rule: &dyn Rule, text: &str) -> Vec<Problem> {
    rule.check(&PositionIndex::new(text))
}

fn fix_text(problem: &Problem) -> &str {
    problem.fix.as_ref().expect("problem should carry a fix").new_text()
}

#[test]
fn test_yo_free_text_has_no_problems() {
    let texts = ["", "Обычный текст без этой буквы.", "Plain ASCII\nlines", "  \n\n"];
    for text in texts {
        assert!(run(&ReplaceYoRule::new(), text).is_empty(), "{:?}", text);
    }
}

#[test]
fn test_yo_one_problem_per_occurrence() {
    for n in 1..=12 {
        let text = "ё".repeat(n);
        let problems = run(&ReplaceYoRule::new(), &text);
        assert_eq!(problems.len(), n);
        for (i, problem) in problems.iter().enumerate() {
            let col = i as u32;
            assert_eq!(
                problem.range,
                Range::new(Position::new(0, col), Position::new(0, col + 1))
            );
        }
    }
}

#[test]
fn test_yo_fixes_are_idempotent() {
    let mut text = "Ёлка и ещё\nпочтальон Печкин ещё раз.".to_string();
    while let Some(problem) = run(&ReplaceYoRule::new(), &text).into_iter().next() {
        text = apply_fix(&text, problem.fix.as_ref().unwrap());
    }
    assert_eq!(text, "Елка и еще\nпочтальон Печкин еще раз.");
    assert!(run(&ReplaceYoRule::new(), &text).is_empty());
}

#[test]
fn test_phrase_inside_longer_word_not_flagged() {
    let rule = BureaucraticWordsRule::default();
    // "иные" and "является" are listed forms; these words only contain them
    assert!(run(&rule, "Осиные гнезда.").is_empty());
    assert!(run(&rule, "Ошибка проявляется редко.").is_empty());
    assert!(run(&rule, "неиные").is_empty());
    assert!(run(&rule, "иныеслова").is_empty());
}

#[test]
fn test_phrase_whole_word_flagged_case_insensitive() {
    let rule = BureaucraticWordsRule::default();
    let problems = run(&rule, "Иные способы. ИНЫЕ способы.");
    assert_eq!(problems.len(), 2);
    assert!(problems.iter().all(|p| fix_text(p) == "другие"));
    assert_eq!(problems[1].range.start, Position::new(0, 14));
}

#[test]
fn test_placeholder_examples() {
    let rule = PlaceholderCaseRule::new();

    assert!(run(&rule, "Укажите <ip_address>.").is_empty());

    let problems = run(&rule, "Укажите <IP-ADDRESS>.");
    assert_eq!(problems.len(), 1);
    assert_eq!(fix_text(&problems[0]), "<ip_address>");

    // CamelCase is lowercased, not split
    let problems = run(&rule, "<IpAddress>");
    assert_eq!(problems.len(), 1);
    assert_eq!(fix_text(&problems[0]), "<ipaddress>");
}

#[test]
fn test_placeholder_in_inline_literal_skipped() {
    let rule = PlaceholderCaseRule::new();
    assert!(run(&rule, "Команда ``ping <Host Name>`` проверяет связь.").is_empty());
    // A line break between the backticks breaks the literal
    assert_eq!(run(&rule, "`a\n<Host Name> b`").len(), 1);
}

#[test]
fn test_sentence_after_list_marker() {
    let text = "#. First sentence. Second sentence.";
    let problems = run(&SentencePerLineRule::new(), text);
    assert_eq!(problems.len(), 1);

    let problem = &problems[0];
    assert_eq!(problem.range.end, Position::new(0, 35));
    let fixed = apply_fix(text, problem.fix.as_ref().unwrap());
    assert_eq!(fixed, "#. First sentence.\n   Second sentence.");
    assert!(run(&SentencePerLineRule::new(), &fixed).is_empty());
}

#[test]
fn test_heading_separated_by_blank_line() {
    let text = "First\n=====\n\nSecond\n------\n";
    let problems = run(&HeadingGapRule::default(), text);
    assert_eq!(problems.len(), 1);
    assert_eq!(
        problems[0].range,
        Range::new(Position::new(1, 0), Position::new(3, 0))
    );
}

#[test]
fn test_heading_separated_by_comment_only() {
    let text = "First\n=====\n\n.. comment\n\nSecond\n------\n";
    assert_eq!(run(&HeadingGapRule::default(), text).len(), 1);
}

#[test]
fn test_heading_separated_by_text() {
    let text = "First\n=====\n\nSome text.\n\nSecond\n------\n";
    assert!(run(&HeadingGapRule::default(), text).is_empty());
}

#[test]
fn test_heading_fix_round_trip() {
    let text = "First\n=====\nSecond\n------\nThird\n~~~~~\n";
    let rule = HeadingGapRule::default();

    let problems = run(&rule, text);
    assert_eq!(problems.len(), 2);

    let fixed = apply_fix(text, problems[0].fix.as_ref().unwrap());
    let after = run(&rule, &fixed);
    assert_eq!(after.len(), 1);
    // Only the untouched Second/Third pair remains
    assert_eq!(after[0].range.start.line, 4);
    assert!(matches!(after[0].fix, Some(Fix::Insert { .. })));
}
