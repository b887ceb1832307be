use crate::domain::model::{Evaluation, Limits};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn limits(&self) -> Limits;
    fn decimals(&self) -> usize;
}

/// Turns evaluations into the text a host displays.
pub trait Renderer {
    fn render(&self, evaluation: &Evaluation) -> Result<String>;
    fn render_advisory(&self, message: &str) -> Result<String>;
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&self, evaluation: &Evaluation) -> Result<String> {
        (**self).render(evaluation)
    }

    fn render_advisory(&self, message: &str) -> Result<String> {
        (**self).render_advisory(message)
    }
}
