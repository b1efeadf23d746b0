//! Render contract for configuration fragments.

use crate::writer::ConfigWriter;

/// A configuration fragment that can render itself into a [`ConfigWriter`].
///
/// Detailed triggers, parameters, and steps all implement this; the surrounding
/// generator decides nesting by wrapping calls in indentation scopes.
pub trait RenderEntity {
    /// Write this fragment at the writer's current indentation level.
    fn render(&self, writer: &mut ConfigWriter);

    /// Render this fragment into a fresh writer and return the text.
    fn render_to_string(&self) -> String {
        let mut writer = ConfigWriter::new();
        self.render(&mut writer);
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fragment;

    impl RenderEntity for Fragment {
        fn render(&self, writer: &mut ConfigWriter) {
            writer.write_block("fragment:", |w| w.write_line("value: 'x'"));
        }
    }

    #[test]
    fn render_to_string_starts_at_zero_indent() {
        assert_eq!(Fragment.render_to_string(), "fragment:\n  value: 'x'\n");
    }
}
