/// Shared support unit generator - the caller registry

use anyhow::Result;
use caller_ir::CallerBundle;

use crate::to_snake_case;

pub struct SupportGenerator;

impl crate::Codegen for SupportGenerator {
    fn generate(&self, bundle: &CallerBundle) -> Result<crate::GeneratedCode> {
        Ok(crate::GeneratedCode {
            files: vec![crate::GeneratedFile {
                path: "callers.rs".to_string(),
                content: generate_registry(bundle),
            }],
        })
    }

    fn language(&self) -> &str {
        "rust-caller-registry"
    }
}

fn generate_registry(bundle: &CallerBundle) -> String {
    let mut output = String::new();
    let registry_name = format!("{}Callers", bundle.name);
    // Missing global address degrades to an empty placeholder; the pass has
    // already warned about it.
    let global = bundle.base_address.as_deref().unwrap_or("");

    output.push_str(&format!("// Auto-generated caller registry ({})\n\n", bundle.name));

    for service in &bundle.services {
        output.push_str(&format!(
            "mod {}_caller;\n",
            to_snake_case(&service.name)
        ));
    }
    if !bundle.services.is_empty() {
        output.push('\n');
    }

    output.push_str(&format!("pub struct {} {{\n", registry_name));
    for service in &bundle.services {
        output.push_str(&format!(
            "    pub {}: {}_caller::{}Caller,\n",
            to_snake_case(&service.name),
            to_snake_case(&service.name),
            service.name
        ));
    }
    output.push_str("}\n\n");

    output.push_str(&format!("impl {} {{\n", registry_name));
    output.push_str("    pub fn new() -> Self {\n");
    output.push_str("        Self {\n");
    for service in &bundle.services {
        output.push_str(&format!(
            "            {}: {}_caller::{}Caller::new({:?}),\n",
            to_snake_case(&service.name),
            to_snake_case(&service.name),
            service.name,
            service.address(global)
        ));
    }
    output.push_str("        }\n");
    output.push_str("    }\n");
    output.push_str("}\n");

    output
}
