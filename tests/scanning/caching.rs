#[cfg(test)]
mod caching {
    use lapel::config::Settings;
    use lapel::engine::{Calculator, Engine, EngineError, Value};
    use lapel::scanning::Scanner;
    use lapel::spans::Markdown;

    /// Counts how often the scanner actually asks for a computation.
    #[derive(Debug, Default)]
    struct Counting {
        inner: Calculator,
        calls: usize,
    }

    impl Engine for Counting {
        fn set_variable(&mut self, name: &str, value: &str) -> Result<Value, EngineError> {
            self.calls += 1;
            self.inner
                .set_variable(name, value)
        }

        fn solve(&mut self, equation: &str, variable: &str) -> Result<Vec<Value>, EngineError> {
            self.calls += 1;
            self.inner
                .solve(equation, variable)
        }

        fn evaluate(&mut self, expression: &str) -> Result<Value, EngineError> {
            self.calls += 1;
            self.inner
                .evaluate(expression)
        }

        fn set_function(
            &mut self,
            name: &str,
            parameter: &str,
            body: &str,
        ) -> Result<(), EngineError> {
            self.calls += 1;
            self.inner
                .set_function(name, parameter, body)
        }
    }

    fn counting(settings: &Settings) -> Scanner<Counting> {
        Scanner::with_engine(Counting::default(), settings)
    }

    fn calls(scanner: &Scanner<Counting>) -> usize {
        scanner
            .evaluator()
            .engine()
            .calls
    }

    #[test]
    fn identical_snippets_computed_once() {
        let document = "`1+1=?` and again `1+1=?`";
        let mut scanner = counting(&Settings::default());

        let shown = scanner
            .update(document, Some(document.len() + 10), &Markdown)
            .len();
        assert_eq!(shown, 2);
        assert_eq!(calls(&scanner), 1);
        assert_eq!(
            scanner
                .cache()
                .len(),
            1
        );

        scanner.update(document, Some(document.len() + 10), &Markdown);
        assert_eq!(calls(&scanner), 1);
    }

    #[test]
    fn editing_forces_recompute() {
        let document = "`1+1=?` and again `1+1=?`";
        let mut scanner = counting(&Settings::default());

        scanner.update(document, Some(document.len() + 10), &Markdown);
        assert_eq!(calls(&scanner), 1);

        // cursor inside the first snippet: every snippet is recomputed
        let shown = scanner
            .update(document, Some(2), &Markdown)
            .len();
        assert_eq!(calls(&scanner), 3);
        assert_eq!(shown, 1);

        // cursor at the end of the snippet's text counts as editing too
        scanner.update(document, Some(6), &Markdown);
        assert_eq!(calls(&scanner), 5);
    }

    #[test]
    fn declarations_run_every_scan() {
        let document = "`k := 3` and `k*2=?`";
        let mut scanner = counting(&Settings::default());

        scanner.update(document, Some(100), &Markdown);
        assert_eq!(calls(&scanner), 2);

        // the evaluation comes from the cache, the declaration does not
        let shown = scanner
            .update(document, Some(100), &Markdown)
            .len();
        assert_eq!(shown, 2);
        assert_eq!(calls(&scanner), 3);
    }

    #[test]
    fn failures_not_cached() {
        let document = "`z=?`";
        let mut scanner = counting(&Settings::default());

        scanner.update(document, Some(100), &Markdown);
        scanner.update(document, Some(100), &Markdown);

        assert_eq!(calls(&scanner), 2);
        assert!(scanner
            .cache()
            .is_empty());
    }

    #[test]
    fn unrecognized_never_reach_engine() {
        let document = "`fn main()` and `a == b`";
        let mut scanner = counting(&Settings::default());

        scanner.update(document, Some(100), &Markdown);

        assert_eq!(calls(&scanner), 0);
    }

    #[test]
    fn clearing_starts_afresh() {
        let document = "`2*3=?`";
        let mut scanner = counting(&Settings::default());

        scanner.update(document, Some(100), &Markdown);
        scanner.clear_cache();
        assert!(scanner
            .cache()
            .is_empty());

        scanner.update(document, Some(100), &Markdown);
        assert_eq!(calls(&scanner), 2);
    }

    #[test]
    fn disabled_cache() {
        let settings = Settings {
            cache_capacity: Some(0),
            ..Settings::default()
        };
        let document = "`2*3=?` `2*3=?`";
        let mut scanner = counting(&settings);

        let shown = scanner
            .update(document, Some(100), &Markdown)
            .len();

        assert_eq!(shown, 2);
        assert_eq!(calls(&scanner), 2);
    }

    #[test]
    fn bounded_cache_evicts() {
        let settings = Settings {
            cache_capacity: Some(1),
            ..Settings::default()
        };
        let document = "`2*3=?` `4*5=?`";
        let mut scanner = counting(&settings);

        scanner.update(document, Some(100), &Markdown);
        assert_eq!(
            scanner
                .cache()
                .len(),
            1
        );
        assert!(scanner
            .cache()
            .contains("4*5=?"));

        scanner.update(document, Some(100), &Markdown);
        assert_eq!(calls(&scanner), 4);
    }
}
