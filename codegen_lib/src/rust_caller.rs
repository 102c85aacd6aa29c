/// Rust caller generator - one client struct per service

use anyhow::Result;
use caller_ir::{CallerBundle, HttpVerb, Operation, Service};

use crate::to_snake_case;

pub struct RustCallerGenerator;

impl crate::Codegen for RustCallerGenerator {
    fn generate(&self, bundle: &CallerBundle) -> Result<crate::GeneratedCode> {
        let mut files = Vec::new();

        for service in &bundle.services {
            let code = generate_caller(service)?;
            files.push(crate::GeneratedFile {
                path: format!("{}_caller.rs", to_snake_case(&service.name)),
                content: code,
            });
        }

        Ok(crate::GeneratedCode { files })
    }

    fn language(&self) -> &str {
        "rust-caller"
    }
}

fn generate_caller(service: &Service) -> Result<String> {
    let mut output = String::new();
    let caller_name = format!("{}Caller", service.name);

    output.push_str(&format!("// Auto-generated caller for {}\n\n", service.name));
    output.push_str("use super::types::*;\n\n");

    output.push_str(&format!("pub struct {} {{\n", caller_name));
    output.push_str("    client: reqwest::Client,\n");
    output.push_str("    base_address: String,\n");
    output.push_str("}\n\n");

    output.push_str(&format!("impl {} {{\n", caller_name));
    output.push_str("    pub fn new(base_address: impl Into<String>) -> Self {\n");
    output.push_str("        Self {\n");
    output.push_str("            client: reqwest::Client::new(),\n");
    output.push_str("            base_address: base_address.into(),\n");
    output.push_str("        }\n");
    output.push_str("    }\n");

    for op in &service.operations {
        output.push('\n');
        generate_method(&mut output, op);
    }

    output.push_str("}\n");

    Ok(output)
}

fn generate_method(output: &mut String, op: &Operation) {
    let method_name = to_snake_case(&op.name);
    let payload = op.return_type.as_deref().unwrap_or("()");

    let mut args = String::new();
    for param in &op.params {
        args.push_str(&format!(", {}: {}", param.name, param.ty));
    }

    output.push_str(&format!(
        "    pub async fn {}(&self{}) -> Result<{}, reqwest::Error> {{\n",
        method_name, args, payload
    ));
    output.push_str(&format!(
        "        let url = format!(\"{{}}/{{}}\", self.base_address, {:?});\n",
        op.route
    ));

    let mut request = format!("self.client.{}(&url)", op.verb.as_str());
    let mut params = op.params.iter();
    if op.verb.has_body() {
        if let Some(body) = params.next() {
            request.push_str(&format!(".json(&{})", body.name));
        }
    }
    for param in params {
        request.push_str(&format!(".query(&[({:?}, &{})])", param.name, param.name));
    }

    output.push_str(&format!("        let response = {}.send().await?;\n", request));
    if op.return_type.is_some() {
        output.push_str("        response.error_for_status_ref()?;\n");
        output.push_str("        response.json().await\n");
    } else {
        output.push_str("        response.error_for_status()?;\n");
        output.push_str("        Ok(())\n");
    }
    output.push_str("    }\n");
}
