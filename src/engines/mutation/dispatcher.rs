use super::generator::TextGenerator;
use crate::data::TemplateStore;
use crate::error::{GenerationError, Result};
use crate::types::{MutationStrategy, Problem};
use std::sync::Arc;

/// Turns a problem and a strategy into a rewritten child problem
pub struct MutationDispatcher {
    templates: TemplateStore,
    generator: Arc<dyn TextGenerator>,
}

impl MutationDispatcher {
    pub fn new(templates: TemplateStore, generator: Arc<dyn TextGenerator>) -> Self {
        Self { templates, generator }
    }

    pub async fn mutate(&self, problem: &Problem, strategy: MutationStrategy) -> Result<Problem> {
        let template = self.templates.get(strategy)?;
        let prompt = template.render(&problem.content)?;

        let generated = self.generator.generate(&prompt, &problem.content).await?;
        let content = generated.trim();
        if content.is_empty() {
            return Err(GenerationError::EmptyResponse.into());
        }

        let child = problem.derive(content, strategy);
        log::debug!(
            "Mutated {} -> {} via {} ({} chars)",
            problem.id,
            child.id,
            strategy,
            child.content.len()
        );
        Ok(child)
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn generator(&self) -> &Arc<dyn TextGenerator> {
        &self.generator
    }
}
