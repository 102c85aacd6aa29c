/// Caller codegen library - shared code generation logic
///
/// Renders a `CallerBundle` into generated source files: one caller per
/// service plus one shared support unit. Emission is a pure function of the
/// bundle — identical bundles produce byte-identical files, and writing them
/// anywhere is the host's job.

pub mod rust_caller;
pub mod support;

use caller_ir::CallerBundle;

/// Codegen trait - implement this for each target language
pub trait Codegen {
    fn generate(&self, bundle: &CallerBundle) -> anyhow::Result<GeneratedCode>;
    fn language(&self) -> &str;
}

pub struct GeneratedCode {
    pub files: Vec<GeneratedFile>,
}

pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Run every generator in emission order: per-service callers first, then
/// the shared support unit.
pub fn generate_sources(bundle: &CallerBundle) -> anyhow::Result<Vec<GeneratedFile>> {
    let mut files = rust_caller::RustCallerGenerator.generate(bundle)?.files;
    files.extend(support::SupportGenerator.generate(bundle)?.files);
    Ok(files)
}

/// Convert CamelCase to snake_case.
pub(crate) fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
