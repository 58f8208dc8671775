//! Defines the core rendering trait and context for converting AST to SQL.

pub mod select;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the SQL string during rendering.
///
/// The output is literal text: values are inlined verbatim between
/// single quotes and identifiers are left unquoted, which is what the
/// console transport executes.
#[derive(Default)]
pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }
}

/// Renders a single AST node to its SQL text.
pub fn render(ast: &impl Render) -> String {
    let mut renderer = Renderer::new();
    ast.render(&mut renderer);
    renderer.finish()
}
