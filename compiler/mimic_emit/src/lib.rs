//! Rendering finished blueprints into source text.
//!
//! [`CodeEmitter`] is the boundary between resolution and text synthesis.
//! An emitter reads a [`Blueprint`] and writes lines to a [`SourceSink`]; it
//! makes no policy decisions of its own. Names, strategies, fallbacks and
//! type substitutions all come from the blueprint.
//!
//! [`OutlineEmitter`] is a reference implementation producing a readable
//! C#-flavored skeleton. Its format is not a contract.

mod outline;
mod sink;

pub use outline::OutlineEmitter;
pub use sink::{SourceBuffer, SourceSink};

use mimic_blueprint::Blueprint;

/// Renders a blueprint.
pub trait CodeEmitter {
    /// Write the rendering of `blueprint` to `out`.
    fn emit_blueprint(&self, blueprint: &Blueprint, out: &mut dyn SourceSink);

    /// Render into a fresh string ending in a single newline.
    fn render(&self, blueprint: &Blueprint) -> String {
        let mut out = SourceBuffer::with_capacity(1024);
        self.emit_blueprint(blueprint, &mut out);
        out.finish()
    }
}
