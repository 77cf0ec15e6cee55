#[cfg(test)]
mod golden {
    use std::fs;
    use std::path::Path;

    use lapel::config;
    use lapel::rendering::{splice, Identity};
    use lapel::scanning::Scanner;
    use lapel::spans::Markdown;

    /// Each .md file in tests/golden/ renders, with no cursor anywhere
    /// near a snippet, to the contents of the .txt file of the same name.
    #[test]
    fn ensure_rendered_output() {
        let dir = Path::new("tests/golden/");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("md")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .md files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let document = config::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));
            let expected = file.with_extension("txt");
            let expected = config::load(&expected)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", expected, e));

            let mut scanner = Scanner::new();
            let decorations = scanner.update(&document, Some(usize::MAX), &Markdown);
            let result = splice(&document, decorations, &Identity);

            if result != expected {
                println!("File {:?} rendered as:\n{}", file, result);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Golden files should render as expected, but {} files differed",
                failures.len()
            );
        }
    }
}
