use crate::error::{ProcessorError, Result};
use crate::types::MutationStrategy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const PROBLEM_PLACEHOLDER: &str = "problem";

/// Illustrative input/output pair. Informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExample {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    #[serde(default)]
    pub description: String,
    /// Format string with a `{problem}` placeholder. `{{` and `}}` are literal braces.
    pub format: String,
    #[serde(default)]
    pub examples: Vec<TemplateExample>,
}

impl PromptTemplate {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            description: String::new(),
            format: format.into(),
            examples: Vec::new(),
        }
    }

    /// Substitute `problem` into the format string
    pub fn render(&self, problem: &str) -> Result<String> {
        let mut rendered = String::with_capacity(self.format.len() + problem.len());
        let mut chars = self.format.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    rendered.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    rendered.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for next in chars.by_ref() {
                        if next == '}' {
                            closed = true;
                            break;
                        }
                        name.push(next);
                    }
                    if !closed {
                        return Err(ProcessorError::Template(
                            "unterminated '{' in template".to_string(),
                        ));
                    }
                    if name != PROBLEM_PLACEHOLDER {
                        return Err(ProcessorError::Template(format!(
                            "unknown placeholder '{{{}}}'",
                            name
                        )));
                    }
                    rendered.push_str(problem);
                }
                '}' => {
                    return Err(ProcessorError::Template(
                        "single '}' encountered in template".to_string(),
                    ));
                }
                other => rendered.push(other),
            }
        }

        Ok(rendered)
    }
}

/// Prompt templates keyed by mutation strategy
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: HashMap<MutationStrategy, PromptTemplate>,
    /// Load errors for template files that exist but could not be read or parsed
    unreadable: HashMap<MutationStrategy, String>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates for every strategy, used when no template directory exists
    pub fn builtin() -> Self {
        let mut store = Self::new();
        store.insert(
            MutationStrategy::Rephrase,
            builtin_template(
                "Reword the problem without changing its meaning or difficulty.",
                "Rephrase the following technical problem statement. Keep the task, inputs, \
                 outputs and difficulty identical, but use different wording.\n\n\
                 Problem:\n{problem}\n\nRespond with the rephrased problem statement only.",
                "Reverse a linked list.",
                "Given the head of a singly linked list, return the list in reverse order.",
            ),
        );
        store.insert(
            MutationStrategy::Expand,
            builtin_template(
                "Add detail, context and requirements to the problem.",
                "Expand the following technical problem statement. Add concrete context, \
                 input and output specifications, and requirements that a solver must meet.\n\n\
                 Problem:\n{problem}\n\nRespond with the expanded problem statement only.",
                "Reverse a linked list.",
                "Implement a function that reverses a singly linked list in place.\n\
                 - The input is the head node, which may be null.\n\
                 - Return the new head.\n- Use O(1) extra memory.",
            ),
        );
        store.insert(
            MutationStrategy::Simplify,
            builtin_template(
                "Reduce the problem to its essential task.",
                "Simplify the following technical problem statement. Remove incidental detail \
                 and keep only the essential task in plain language.\n\n\
                 Problem:\n{problem}\n\nRespond with the simplified problem statement only.",
                "Design and implement a thread-safe LRU cache with O(1) get and put.",
                "Build a cache that evicts the least recently used item.",
            ),
        );
        store.insert(
            MutationStrategy::AddConstraints,
            builtin_template(
                "Add explicit constraints such as limits, complexity bounds or edge cases.",
                "Add constraints to the following technical problem statement. Introduce \
                 explicit input limits, complexity requirements and edge cases while keeping \
                 the core task.\n\nProblem:\n{problem}\n\n\
                 Respond with the constrained problem statement only.",
                "Find two numbers in an array that sum to a target.",
                "Find two numbers in an array of up to 10^5 integers that sum to a target \
                 in O(n) time. Each input has exactly one solution.",
            ),
        );
        store
    }

    /// Load `<strategy>.yaml` (or `.yml`) structured templates, falling back to
    /// `<strategy>.txt` plain format strings. Strategies without a file are left out.
    /// A file that cannot be read or parsed only disables its own strategy.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ProcessorError::InputNotFound(format!(
                "template directory {} not found",
                dir.display()
            )));
        }

        let mut store = Self::new();
        for strategy in MutationStrategy::ALL {
            match Self::load_template(dir, strategy) {
                Ok(Some(template)) => store.insert(strategy, template),
                Ok(None) => log::debug!("No template for strategy '{}' in {}", strategy, dir.display()),
                Err(e) => {
                    log::warn!("Skipping template for strategy '{}': {}", strategy, e);
                    store.unreadable.insert(strategy, e.to_string());
                }
            }
        }

        log::info!("Loaded {} mutation templates from {}", store.len(), dir.display());
        Ok(store)
    }

    fn load_template(dir: &Path, strategy: MutationStrategy) -> Result<Option<PromptTemplate>> {
        for extension in ["yaml", "yml"] {
            let path = dir.join(format!("{}.{}", strategy, extension));
            if path.is_file() {
                let contents = std::fs::read_to_string(&path)?;
                let template: PromptTemplate = serde_yaml::from_str(&contents)?;
                return Ok(Some(template));
            }
        }

        let path = dir.join(format!("{}.txt", strategy));
        if path.is_file() {
            let format = std::fs::read_to_string(&path)?;
            return Ok(Some(PromptTemplate::new(format)));
        }

        Ok(None)
    }

    pub fn insert(&mut self, strategy: MutationStrategy, template: PromptTemplate) {
        self.unreadable.remove(&strategy);
        self.templates.insert(strategy, template);
    }

    pub fn remove(&mut self, strategy: MutationStrategy) -> Option<PromptTemplate> {
        self.templates.remove(&strategy)
    }

    pub fn get(&self, strategy: MutationStrategy) -> Result<&PromptTemplate> {
        if let Some(template) = self.templates.get(&strategy) {
            return Ok(template);
        }
        match self.unreadable.get(&strategy) {
            Some(reason) => Err(ProcessorError::Template(format!(
                "template for '{}' could not be loaded: {}",
                strategy, reason
            ))),
            None => Err(ProcessorError::TemplateNotFound(strategy)),
        }
    }

    pub fn contains(&self, strategy: MutationStrategy) -> bool {
        self.templates.contains_key(&strategy)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn builtin_template(description: &str, format: &str, input: &str, output: &str) -> PromptTemplate {
    PromptTemplate {
        description: description.to_string(),
        format: format.to_string(),
        examples: vec![TemplateExample {
            input: input.to_string(),
            output: output.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_problem() {
        let template = PromptTemplate::new("Rewrite: {problem}\nThanks.");
        assert_eq!(
            template.render("Sort a list.").unwrap(),
            "Rewrite: Sort a list.\nThanks."
        );
    }

    #[test]
    fn test_render_unescapes_braces() {
        let template = PromptTemplate::new("Return JSON like {{\"text\": ...}} for {problem}");
        assert_eq!(
            template.render("x").unwrap(),
            "Return JSON like {\"text\": ...} for x"
        );
    }

    #[test]
    fn test_render_rejects_unknown_placeholder() {
        let template = PromptTemplate::new("{problem} in {language}");
        assert!(matches!(template.render("x"), Err(ProcessorError::Template(_))));
    }

    #[test]
    fn test_render_rejects_stray_brace() {
        assert!(PromptTemplate::new("oops }").render("x").is_err());
        assert!(PromptTemplate::new("oops {problem").render("x").is_err());
    }

    #[test]
    fn test_builtin_covers_all_strategies() {
        let store = TemplateStore::builtin();
        for strategy in MutationStrategy::ALL {
            let template = store.get(strategy).unwrap();
            assert!(template.render("Reverse a linked list.").unwrap().contains("Reverse a linked list."));
        }
    }

    #[test]
    fn test_missing_template() {
        let mut store = TemplateStore::builtin();
        store.remove(MutationStrategy::Expand);

        assert!(matches!(
            store.get(MutationStrategy::Expand),
            Err(ProcessorError::TemplateNotFound(MutationStrategy::Expand))
        ));
    }

    #[test]
    fn test_load_dir_prefers_yaml_over_txt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rephrase.txt"), "plain {problem}").unwrap();
        std::fs::write(
            dir.path().join("rephrase.yaml"),
            "description: Reword it\nformat: \"structured {problem}\"\nexamples:\n  - input: a\n    output: b\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("simplify.txt"), "Simplify: {problem}").unwrap();

        let store = TemplateStore::load_dir(dir.path()).unwrap();

        assert_eq!(store.len(), 2);
        let rephrase = store.get(MutationStrategy::Rephrase).unwrap();
        assert_eq!(rephrase.description, "Reword it");
        assert_eq!(rephrase.render("x").unwrap(), "structured x");
        assert_eq!(rephrase.examples.len(), 1);
        assert_eq!(
            store.get(MutationStrategy::Simplify).unwrap().render("x").unwrap(),
            "Simplify: x"
        );
        assert!(!store.contains(MutationStrategy::Expand));
    }

    #[test]
    fn test_load_dir_skips_malformed_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rephrase.txt"), "Reword: {problem}").unwrap();
        std::fs::write(dir.path().join("expand.yaml"), "description: [unclosed").unwrap();
        std::fs::write(dir.path().join("simplify.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let store = TemplateStore::load_dir(dir.path()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(MutationStrategy::Rephrase).unwrap().render("x").unwrap(),
            "Reword: x"
        );
        assert!(matches!(
            store.get(MutationStrategy::Expand),
            Err(ProcessorError::Template(_))
        ));
        assert!(matches!(
            store.get(MutationStrategy::Simplify),
            Err(ProcessorError::Template(_))
        ));
        assert!(matches!(
            store.get(MutationStrategy::AddConstraints),
            Err(ProcessorError::TemplateNotFound(MutationStrategy::AddConstraints))
        ));
    }

    #[test]
    fn test_load_dir_missing() {
        assert!(matches!(
            TemplateStore::load_dir("no/such/dir"),
            Err(ProcessorError::InputNotFound(_))
        ));
    }
}
