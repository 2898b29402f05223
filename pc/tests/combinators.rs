use pc::*;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn epsilon_is_zero_width() {
    let subject = epsilon::<char, char>();
    let out = subject.run(&chars("abc")).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.next, 0);
}

#[test]
fn empty_always_fails() {
    let subject = empty::<char, char>();
    assert_eq!(subject.run(&[]), Err(NoMatch::at(0)));
    assert!(subject.run(&chars("abc")).is_err());
}

#[test]
fn end_of_input_only_at_end() {
    let subject = end_of_input::<char, ()>();
    let input = chars("test_input");

    let out = subject.parse(&input, input.len()).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.next, input.len());

    assert_eq!(subject.parse(&input, 0), Err(NoMatch::at(0)));
}

#[test]
fn any_matches_every_token() {
    let subject = any();
    let input = chars("test_input");
    for (i, c) in input.iter().enumerate() {
        let out = subject.parse(&input, i).unwrap();
        assert_eq!(out.value, *c);
        assert_eq!(out.next, i + 1);
    }
    assert!(subject.parse(&input, input.len()).is_err());
}

#[test]
fn satisfy_fails_past_the_end() {
    let subject = satisfy(|t: &i32| *t > 0);
    let tokens = [-1, 1];

    assert_eq!(subject.run(&tokens), Err(NoMatch::at(0)));
    assert_eq!(subject.parse(&tokens, 1), Ok(Output::new(1, 2)));
    for index in tokens.len()..tokens.len() + 3 {
        assert_eq!(subject.parse(&tokens, index), Err(NoMatch::at(index)));
    }
}

#[test]
fn exact_and_exact_ci() {
    let input = chars("tT_");

    let subject = exact('t');
    assert_eq!(subject.run(&input), Ok(Output::new('t', 1)));
    assert!(subject.parse(&input, 1).is_err());

    let subject = exact_ci('t');
    assert_eq!(subject.run(&input), Ok(Output::new('t', 1)));
    assert_eq!(subject.parse(&input, 1), Ok(Output::new('T', 2)));
    assert!(subject.parse(&input, 2).is_err());
}

#[test]
fn word_collects_chars() {
    let subject = word("test");
    let out = subject.run(&chars("testnot_match")).unwrap();
    assert_eq!(out.value, "test");
    assert_eq!(out.next, 4);

    assert_eq!(subject.run(&chars("tes")), Err(NoMatch::at(3)));
}

#[test]
fn one_of_and_ranges() {
    let subject = one_of("abcdefg");
    assert_eq!(subject.run(&chars("abc")), Ok(Output::new('a', 1)));
    assert!(subject.run(&chars("h")).is_err());

    let subject = char_range('a', 'c');
    for c in ['a', 'b', 'c'] {
        assert_eq!(subject.run(&[c]), Ok(Output::new(c, 1)));
    }
    assert!(subject.run(&['d']).is_err());

    let subject = char_range_ci('a', 'C');
    for c in ['A', 'B', 'C', 'b'] {
        assert_eq!(subject.run(&[c]), Ok(Output::new(c, 1)));
    }
    assert!(subject.run(&['D']).is_err());
}

#[test]
fn seq_pairs_results() {
    let subject = seq(exact("first"), exact("second"));
    let out = subject.run(&["first", "second"]).unwrap();
    assert_eq!(out.value, ("first", "second"));
    assert_eq!(out.next, 2);

    assert_eq!(subject.run(&["first"]), Err(NoMatch::at(1)));
}

#[test]
fn seq_list_flattens_and_drops_empty() {
    let digits: Vec<char> = "0123456789".chars().collect();
    let parsers = digits.iter().map(|c| exact(*c).map(Match::Value)).collect();
    let subject = seq_list(parsers);

    let out = subject.run(&digits).unwrap();
    assert_eq!(out.value, digits);
    assert_eq!(out.next, 10);

    assert!(subject.run(&digits[..9]).is_err());
    assert!(subject.parse(&digits, 1).is_err());

    let subject = seq_list(vec![
        epsilon(),
        exact('a').map(Match::Value),
        epsilon(),
        exact('b').map(Match::Value),
        end_of_input(),
    ]);
    assert_eq!(subject.run(&chars("ab")), Ok(Output::new(vec!['a', 'b'], 2)));
    assert!(subject.run(&chars("abc")).is_err());
}

#[test]
fn transform_keeps_next_index() {
    let subject = transform(exact('c'), |_| "expected");
    assert_eq!(subject.parse(&chars("abc"), 2), Ok(Output::new("expected", 3)));
    assert_eq!(subject.run(&chars("not_matched")), Err(NoMatch::at(0)));
}

#[test]
fn alt_is_ordered_choice() {
    let tokens = [1, 2, 3];
    let subject = alt(exact(1), exact(2));
    assert_eq!(subject.run(&tokens), Ok(Output::new(1, 1)));
    assert_eq!(subject.parse(&tokens, 1), Ok(Output::new(2, 2)));
    assert!(subject.parse(&tokens, 2).is_err());

    // both would match; the first one wins even though the second is longer
    let short = word("a");
    let long = word("ab");
    let subject = alt(short, long);
    assert_eq!(subject.run(&chars("ab")), Ok(Output::new("a".to_string(), 1)));

    let subject = alt(epsilon(), exact(2).map(Match::Value));
    assert!(subject.run(&[2]).unwrap().is_empty());

    let subject = alt(empty(), exact(2));
    assert_eq!(subject.run(&[2]), Ok(Output::new(2, 1)));
}

#[test]
fn alt_reports_furthest_failure() {
    let subject = alt(word("abc"), word("x"));
    assert_eq!(subject.run(&chars("abx")), Err(NoMatch::at(2)));
}

#[test]
fn star_remembers_the_attempt_that_stopped_it() {
    let pairs = star(seq(exact('a'), exact('b')));
    let out = pairs.run(&chars("abac")).unwrap();
    assert_eq!(out.next, 2);
    assert_eq!(out.furthest, 3);

    // the stopped attempt outranks the failure right after the repetition
    let subject = seq(pairs, exact('!'));
    assert_eq!(subject.run(&chars("abac")), Err(NoMatch::at(3)));

    let subject = alt(word("x").map(|_| 0), star(exact('a')).map(|a| a.len()));
    assert_eq!(subject.run(&chars("aab")).unwrap().furthest, 2);
}

#[test]
fn alt_list_tries_in_order() {
    let tokens: Vec<i32> = (0..10).collect();
    let subject = alt_list(tokens.iter().map(|t| exact(*t)).collect());
    for token in &tokens {
        assert_eq!(subject.run(&[*token]), Ok(Output::new(*token, 1)));
    }
    assert!(subject.run(&[10]).is_err());

    let subject = alt_list(vec![
        word("ab").map(|_| 1),
        word("a").map(|_| 2),
        word("abc").map(|_| 3),
    ]);
    assert_eq!(subject.run(&chars("abc")).unwrap().value, 1);

    let nothing = alt_list::<char, char>(vec![]);
    assert!(nothing.run(&chars("a")).is_err());
}

#[test]
fn star_never_fails() {
    let subject = star(char_range_ci('a', 'z'));
    let input = chars("ABCDEefghijj");
    let out = subject.run(&input).unwrap();
    assert_eq!(out.value, input);
    assert_eq!(out.next, input.len());

    assert_eq!(subject.run(&[]), Ok(Output::new(vec![], 0)));
    assert_eq!(subject.parse(&chars("ab1"), 2), Ok(Output::new(vec![], 2)));
}

#[test]
fn star_stops_on_zero_width_match() {
    let subject = star(epsilon::<char, ()>());
    let out = subject.run(&chars("abc")).unwrap();
    assert_eq!(out.value, vec![Match::Empty]);
    assert_eq!(out.next, 0);
}

#[test]
fn plus_needs_one() {
    let subject = plus(char_range('a', 'z'));
    let out = subject.run(&chars("abcdEF")).unwrap();
    assert_eq!(out.value, chars("abcd"));
    assert_eq!(out.next, 4);

    assert_eq!(subject.run(&chars("z")), Ok(Output::new(vec!['z'], 1)));
    assert!(subject.run(&[]).is_err());

    let star = star(char_range('a', 'z'));
    let input = chars("xyz1");
    assert_eq!(
        subject.run(&input).unwrap().value.len(),
        star.run(&input).unwrap().value.len()
    );
    assert_eq!(
        subject.parse(&input, 1).unwrap().value.len(),
        star.parse(&input, 0).unwrap().value.len() - 1
    );
}

fn a_run() -> Parser<char, usize> {
    let more = seq(exact('a'), lazy(a_run)).map(|(_, rest)| rest + 1);
    alt(more, epsilon::<char, ()>().map(|_| 0))
}

#[test]
fn lazy_allows_self_reference() {
    let subject = a_run();
    assert_eq!(subject.run(&chars("aa")), Ok(Output::new(2, 2)));
    assert_eq!(subject.run(&[]), Ok(Output::new(0, 0)));
    assert_eq!(subject.run(&chars("aaab")), Ok(Output::new(3, 3)));
}

fn nested() -> Parser<char, usize> {
    let inner = seq(seq(exact('('), lazy(nested)), exact(')')).map(|((_, depth), _)| depth + 1);
    alt(inner, epsilon::<char, ()>().map(|_| 0))
}

#[test]
fn lazy_balanced_parens() {
    let subject = nested();
    assert_eq!(subject.run(&chars("((()))")), Ok(Output::new(3, 6)));
    assert_eq!(subject.run(&chars("(()")).unwrap().next, 0);
}

#[test]
fn guard_checks_the_match() {
    let subject = guard(star(exact('a')), |m: &Vec<char>| m.len() > 1);
    assert_eq!(subject.run(&chars("a")), Err(NoMatch::at(0)));
    assert_eq!(subject.run(&chars("aa")), Ok(Output::new(chars("aa"), 2)));
}

#[test]
fn diff_excludes_sub_case() {
    let aa = seq(word("aa"), end_of_input::<char, ()>());
    let subject = diff(star(exact('a')), aa);

    assert_eq!(subject.run(&chars("a")).unwrap().value, chars("a"));
    assert_eq!(subject.run(&chars("aaa")).unwrap().value, chars("aaa"));
    assert!(subject.run(&chars("aa")).is_err());
}

#[test]
fn lookahead_does_not_consume() {
    let subject = followed_by(exact('a'), exact('b'));
    assert_eq!(subject.run(&chars("abc")), Ok(Output::new('a', 1)));
    assert!(subject.run(&chars("a")).is_err());

    let subject = not_followed_by(exact('a'), exact('b'));
    assert!(subject.run(&chars("abc")).is_err());
    assert_eq!(subject.run(&chars("ac")), Ok(Output::new('a', 1)));
}

#[test]
fn trace_passes_result_through() {
    let subject = trace(exact('a'), "test_name");
    assert_eq!(subject.run(&chars("a")), Ok(Output::new('a', 1)));
    assert!(subject.run(&chars("b")).is_err());
}

fn ones() -> Parser<i32, i32> {
    plus(exact(1)).map(|ones| ones.iter().sum())
}

#[test]
fn search_finds_first() {
    let subject = ones();
    let out = subject.search(&[2, 1, 1, 1, 2, 1], 0).unwrap();
    assert_eq!(out, Output::new(3, 4));

    assert_eq!(subject.search(&[2, 1, 1, 1, 2, 1], 4), Ok(Output::new(1, 6)));
    assert!(subject.search(&[2, 2], 0).is_err());
}

#[test]
fn search_all_resumes_after_each_match() {
    let subject = ones();
    let outs = subject.search_all(&[2, 1, 1, 1, 2, 1]).unwrap();
    assert_eq!(outs, vec![Output::new(3, 4), Output::new(1, 6)]);

    let outs = subject.search_all(&[1, 2, 2, 1, 1, 3]).unwrap();
    assert_eq!(outs, vec![Output::new(1, 1), Output::new(2, 5)]);

    assert!(subject.search_all(&[2, 3]).is_err());
    assert!(subject.search_all(&[]).is_err());
}

#[test]
fn search_all_non_overlapping() {
    let subject = word("aa");
    let outs = subject.search_all(&chars("aaaxaa")).unwrap();
    let found: Vec<(String, usize)> = outs.into_iter().map(|o| (o.value, o.next)).collect();
    assert_eq!(found, vec![("aa".to_string(), 2), ("aa".to_string(), 6)]);
}
