#[cfg(test)]
mod document {
    use lapel::rendering::{splice, Identity};
    use lapel::scanning::{DecorationSet, Scanner};
    use lapel::spans::{Markdown, SpanSource};

    fn offset(document: &str, snippet: &str) -> usize {
        document
            .find(snippet)
            .unwrap_or_else(|| panic!("'{}' not in document", snippet))
    }

    fn displays(decorations: &DecorationSet) -> Vec<&str> {
        decorations
            .iter()
            .map(|decoration| decoration.display.as_str())
            .collect()
    }

    #[test]
    fn declared_constant_evaluated() {
        let document = "Let `pi := 3.14159` so the area is `pi=?` today.";
        let mut scanner = Scanner::new();

        let decorations = scanner.update(document, Some(0), &Markdown);

        assert_eq!(displays(decorations), vec!["pi := 3.14159", "pi ⇒ 3.14159"]);
        assert_eq!(
            decorations
                .at(offset(document, "pi=?"))
                .map(|d| d.end),
            Some(offset(document, "pi=?") + 4)
        );
    }

    #[test]
    fn equation_solved() {
        let document = "Roots: `solve(x^2-4=0, x)`";
        let mut scanner = Scanner::new();

        let decorations = scanner.update(document, Some(0), &Markdown);

        assert_eq!(displays(decorations), vec!["x^2-4=0 ⇒ x = 2.00000"]);
    }

    #[test]
    fn declaration_before_use() {
        let document = "`y := 4` then `y*2=?`";
        let mut scanner = Scanner::new();

        let decorations = scanner.update(document, Some(document.len() + 10), &Markdown);

        assert_eq!(displays(decorations), vec!["y := 4.00000", "y*2 ⇒ 8.00000"]);
    }

    #[test]
    fn use_before_declaration() {
        let document = "`y*2=?` then `y := 4`";
        let mut scanner = Scanner::new();

        let decorations = scanner.update(document, Some(document.len() + 10), &Markdown);
        assert_eq!(displays(decorations), vec!["y := 4.00000"]);

        // the session remembers y, and the failure was never cached
        let decorations = scanner.update(document, Some(document.len() + 10), &Markdown);
        assert_eq!(displays(decorations), vec!["y*2 ⇒ 8.00000", "y := 4.00000"]);
    }

    #[test]
    fn redeclaration_follows_document_order() {
        let mut scanner = Scanner::new();

        let document = "`x := 5` then `x := 7` end";
        let decorations = scanner.update(document, Some(document.len() + 10), &Markdown);
        assert_eq!(displays(decorations), vec!["x := 5.00000", "x := 7.00000"]);

        let document = "`x := 5` then `x=?` then `x := 7` end";
        let decorations = scanner.update(document, Some(document.len() + 10), &Markdown);
        assert_eq!(
            displays(decorations),
            vec!["x := 5.00000", "x ⇒ 5.00000", "x := 7.00000"]
        );
    }

    #[test]
    fn redefined_function_follows_document_order() {
        let mut scanner = Scanner::new();

        let document = "`g(t) := t+1` `g(t) := t+2`";
        scanner.update(document, Some(document.len() + 10), &Markdown);

        let document = "`g(t) := t+1` `g(1)=?` `g(t) := t+2`";
        let decorations = scanner.update(document, Some(document.len() + 10), &Markdown);
        assert_eq!(
            displays(decorations),
            vec!["g(t) = t+1", "g(1) ⇒ 2.00000", "g(t) = t+2"]
        );
    }

    #[test]
    fn deeply_nested_snippet_fails_alone() {
        let document = format!(
            "`2+2=?` then `{}1{}=?` and `{}1=?` last",
            "(".repeat(5000),
            ")".repeat(5000),
            "-".repeat(200_000)
        );
        let mut scanner = Scanner::new();

        let decorations = scanner.update(&document, Some(usize::MAX), &Markdown);

        assert_eq!(displays(decorations), vec!["2+2 ⇒ 4.00000"]);
    }

    #[test]
    fn unrecognized_left_alone() {
        let document = "Call `println!()` or `let x = 5;` or `a = b`.";
        let mut scanner = Scanner::new();

        let decorations = scanner.update(document, Some(0), &Markdown);

        assert!(decorations.is_empty());
    }

    #[test]
    fn failures_isolated() {
        let document = "`1/0=?` and `2+2=?` and `nothing_here=?` and `(1+=?`";
        let mut scanner = Scanner::new();

        let decorations = scanner.update(document, Some(0), &Markdown);

        assert_eq!(displays(decorations), vec!["2+2 ⇒ 4.00000"]);
        assert_eq!(
            decorations
                .iter()
                .next()
                .map(|d| d.start),
            Some(offset(document, "2+2=?"))
        );
    }

    #[test]
    fn no_cursor_keeps_previous() {
        let document = "`2+2=?`";
        let mut scanner = Scanner::new();

        let before = scanner
            .update(document, Some(100), &Markdown)
            .clone();
        assert_eq!(before.len(), 1);

        let after = scanner.update("`3+3=?` changed", None, &Markdown);
        assert_eq!(*after, before);

        let spans = Markdown.spans(document);
        assert_eq!(scanner.scan(document, None, &spans), None);
    }

    #[test]
    fn cursor_suppresses_nearby() {
        let document = "`2+2=?` and then `3+3=?` last";
        let second = offset(document, "3+3=?");
        let mut scanner = Scanner::new();

        // inside the second snippet
        let decorations = scanner.update(document, Some(second + 2), &Markdown);
        assert_eq!(displays(decorations), vec!["2+2 ⇒ 4.00000"]);

        // just past its closing backtick, still within the slack
        let decorations = scanner.update(document, Some(second + 6), &Markdown);
        assert_eq!(displays(decorations), vec!["2+2 ⇒ 4.00000"]);

        // well clear of it
        let decorations = scanner.update(document, Some(document.len()), &Markdown);
        assert_eq!(displays(decorations), vec!["2+2 ⇒ 4.00000", "3+3 ⇒ 6.00000"]);
    }

    #[test]
    fn code_blocks_ignored() {
        let document = "Before\n\n```\n`1+1=?`\n```\n\nAfter `2+2=?`\n";
        let mut scanner = Scanner::new();

        let decorations = scanner.update(document, Some(0), &Markdown);

        assert_eq!(displays(decorations), vec!["2+2 ⇒ 4.00000"]);
    }

    #[test]
    fn functions_applied() {
        let document = "`sq(t) := t^2` gives `sq(3)+1=?`";
        let mut scanner = Scanner::new();

        let decorations = scanner.update(document, Some(document.len() + 10), &Markdown);

        assert_eq!(displays(decorations), vec!["sq(t) = t^2", "sq(3)+1 ⇒ 10.00000"]);
    }

    #[test]
    fn spliced_into_document() {
        let document = "Area `pi=?` here";
        let mut scanner = Scanner::new();

        let decorations = scanner.update(document, Some(document.len() + 10), &Markdown);

        assert_eq!(
            splice(document, decorations, &Identity),
            "Area pi ⇒ 3.14159 here"
        );
    }

    #[test]
    fn check_reports_every_snippet() {
        let document = "`x := 2` `x*y=?` `hello` `x^3=?`";
        let spans = Markdown.spans(document);
        let mut scanner = Scanner::new();

        let reports = scanner.check(document, &spans);

        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].outcome, Some(Ok("x := 2.00000".to_string())));
        assert!(matches!(reports[1].outcome, Some(Err(_))));
        assert_eq!(reports[2].outcome, None);
        assert_eq!(reports[2].text, "hello");
        assert_eq!(reports[3].outcome, Some(Ok("x^3 ⇒ 8.00000".to_string())));
    }
}
